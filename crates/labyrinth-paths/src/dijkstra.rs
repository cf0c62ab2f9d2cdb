use labyrinth_core::{Grid, GridError, Node, Point};

use crate::search;
use crate::traits::Strategy;

/// Dijkstra ranking: settle by distance from the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Strategy for Dijkstra {
    #[inline]
    fn key(&self, node: &Node) -> u32 {
        node.distance
    }

    fn seed(&self, start: &mut Node) {
        start.distance = 0;
    }

    #[inline]
    fn improve(&self, node: &mut Node, distance: u32, _finish: Point) {
        node.distance = distance;
    }
}

/// Run Dijkstra's algorithm from `start` to `finish`.
///
/// Returns the nodes in the order they were settled. The run stops as soon
/// as `finish` is settled; if `finish` is unreachable the order lists every
/// reachable node and `grid[finish].visited` stays `false`. Each node's
/// `distance` and `previous` are left in the grid for
/// [`path_from_finish`](crate::path_from_finish).
pub fn dijkstra(grid: &mut Grid, start: Point, finish: Point) -> Result<Vec<Point>, GridError> {
    search::best_first(grid, start, finish, &Dijkstra)
}
