//! Maze generation for labyrinth grids.
//!
//! [`generate_maze`] carves a maze with randomized Kruskal: every room is
//! reachable from every other by exactly one route, and the requested
//! endpoints are always left open. Perfectness holds over the rooms; an
//! endpoint forced open on a wall cell between two rooms can close a loop.
//! [`MazeGen`] wraps the same carving around an owned RNG.
//!
//! ```
//! use labyrinth_core::Grid;
//! use labyrinth_maze::MazeGen;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let grid = Grid::new(15, 31).unwrap();
//! let maze = MazeGen::with_rng(StdRng::seed_from_u64(1)).kruskal(&grid);
//! assert!(maze.wall_count() > 0);
//! assert!(maze.is_open(maze.start()));
//! ```

mod dsu;
mod kruskal;

pub use dsu::DisjointSet;
pub use kruskal::{Edge, MazeGen, generate_maze, is_room, room_edges, rooms};
