//! **labyrinth-core**: grid model for the labyrinth pathfinding visualizer.
//!
//! This crate provides the types shared by the search engine and the maze
//! generator: geometry primitives, the [`Node`] cell with its traversal
//! state, and the arena-backed [`Grid`] that keeps exactly one start and one
//! finish.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Dims, Point};
pub use grid::{Grid, reset_traversal_state};
pub use node::{Node, UNREACHABLE};
