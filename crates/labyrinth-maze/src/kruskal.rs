//! Randomized Kruskal maze carving.
//!
//! The grid is split into *rooms* (odd row, odd column, at least one cell
//! from the border) separated by single wall cells. Every pair of
//! neighbouring rooms is a candidate edge; shuffling the edges and joining
//! rooms with a disjoint-set forest carves a spanning tree, so every room
//! is reachable from every other by exactly one route.
//!
//! The endpoints are forced open afterwards. An endpoint sitting on an
//! unused wall cell between two rooms therefore closes a loop, so the maze
//! is only guaranteed perfect over its rooms and carved walls.

use labyrinth_core::{Dims, Grid, GridError, Point};
use log::{debug, trace};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::dsu::DisjointSet;

/// Two neighbouring rooms and the wall cell between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub wall: Point,
}

/// Whether `p` is a room of a grid of size `dims`.
pub fn is_room(dims: Dims, p: Point) -> bool {
    p.is_odd() && p.row >= 1 && p.row <= dims.rows - 2 && p.col >= 1 && p.col <= dims.cols - 2
}

/// Every room, in row-major order.
pub fn rooms(dims: Dims) -> impl Iterator<Item = Point> {
    (1..dims.rows - 1)
        .step_by(2)
        .flat_map(move |row| (1..dims.cols - 1).step_by(2).map(move |col| Point::new(row, col)))
}

/// Candidate edges: each room joined to the room two cells to its right and
/// the room two cells below, when those exist.
pub fn room_edges(dims: Dims) -> Vec<Edge> {
    let mut edges = Vec::new();
    for room in rooms(dims) {
        for (dr, dc) in [(0, 2), (2, 0)] {
            let other = room.shift(dr, dc);
            if is_room(dims, other) {
                edges.push(Edge {
                    a: room,
                    b: other,
                    wall: room.shift(dr / 2, dc / 2),
                });
            }
        }
    }
    edges
}

/// Generate a maze the size of `grid`, with its endpoints at `start` and
/// `finish`.
///
/// The rooms always form a perfect maze. Forcing an endpoint open can add
/// one loop when it sits on a wall cell the carving left closed.
///
/// Only the dimensions of `grid` are used; the result is a fresh grid with
/// clean traversal state. Grids with fewer than three rows or columns have
/// no rooms and come back all open.
pub fn generate_maze<R: Rng + ?Sized>(
    grid: &Grid,
    start: Point,
    finish: Point,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let mut maze = Grid::with_endpoints(grid.rows(), grid.cols(), start, finish)?;
    carve(&mut maze, rng);
    Ok(maze)
}

/// Maze generator holding its own random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze the size of `grid` around its current endpoints.
    pub fn kruskal(&mut self, grid: &Grid) -> Grid {
        let mut maze = grid.clone();
        carve(&mut maze, &mut self.rng);
        maze
    }
}

fn carve<R: Rng + ?Sized>(maze: &mut Grid, rng: &mut R) {
    maze.reset_traversal();
    let dims = maze.dims();
    if dims.rows < 3 || dims.cols < 3 {
        maze.clear_walls();
        debug!("maze: {dims} has no rooms, leaving it open");
        return;
    }

    maze.fill_walls(true);
    let mut room_count = 0;
    for room in rooms(dims) {
        maze.set_wall(room, false);
        room_count += 1;
    }

    let mut edges = room_edges(dims);
    edges.shuffle(rng);

    let mut sets = DisjointSet::new(dims.len());
    let mut carved = 0;
    for edge in &edges {
        let (Some(a), Some(b)) = (dims.index(edge.a), dims.index(edge.b)) else {
            continue;
        };
        if sets.union(a, b) {
            maze.set_wall(edge.wall, false);
            carved += 1;
        }
    }

    let (start, finish) = (maze.start(), maze.finish());
    ensure_open(maze, start, finish, rng);
    ensure_open(maze, finish, start, rng);
    debug!(
        "maze: {dims} carved {carved} of {} edges between {room_count} rooms",
        edges.len()
    );
}

/// Connect endpoint `p` to the maze body if it is not already.
///
/// `other` is the opposite endpoint. It only counts as a way in when it
/// touches the body itself, so two adjacent endpoints cannot satisfy each
/// other. The opened neighbour is preferably one that touches the body.
fn ensure_open<R: Rng + ?Sized>(maze: &mut Grid, p: Point, other: Point, rng: &mut R) {
    let neighbors: Vec<Point> = p
        .neighbors_4()
        .into_iter()
        .filter(|&n| maze.contains(n))
        .collect();
    let connected = neighbors.iter().any(|&n| {
        maze.is_open(n) && (n != other || touches_body(maze, other, [p, other]))
    });
    if connected {
        return;
    }
    let walls: Vec<Point> = neighbors
        .into_iter()
        .filter(|&n| n != other && maze.is_wall(n))
        .collect();
    let touching: Vec<Point> = walls
        .iter()
        .copied()
        .filter(|&n| touches_body(maze, n, [p, other]))
        .collect();
    let pool = if touching.is_empty() { &walls } else { &touching };
    if let Some(&n) = pool.choose(rng) {
        maze.set_wall(n, false);
        trace!("maze: opened {n} next to endpoint {p}");
    }
}

/// Whether `n` has an open neighbour outside `skip`.
fn touches_body(maze: &Grid, n: Point, skip: [Point; 2]) -> bool {
    n.neighbors_4()
        .into_iter()
        .any(|m| !skip.contains(&m) && maze.contains(m) && maze.is_open(m))
}
