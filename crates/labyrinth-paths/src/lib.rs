//! Pathfinding on labyrinth grids.
//!
//! This crate provides the search side of the visualizer:
//!
//! - **Dijkstra** shortest-path search ([`dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`astar`])
//! - **Path reconstruction** from back-links ([`path_from_finish`])
//! - **Reports and replay ordering** for front ends ([`visualize`], [`Replay`])
//!
//! Both searches share one best-first engine and differ only in their
//! [`Strategy`]. They record `distance`, `previous` (and for A* the
//! heuristic fields) on the grid's nodes and return the order in which
//! nodes were settled.
//!
//! | Item | Ranks by |
//! |---|---|
//! | [`Dijkstra`] | `distance` |
//! | [`AStar`] | `distance + manhattan(node, finish)` |

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod replay;
mod report;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::{AStar, astar};
pub use dijkstra::{Dijkstra, dijkstra};
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use path::path_from_finish;
pub use replay::{Replay, Step};
pub use report::{Search, Stats, visualize};
pub use search::best_first;
pub use traits::Strategy;
