use labyrinth_core::{Grid, GridError, Node, Point};

use crate::distance::manhattan;
use crate::search;
use crate::traits::Strategy;

/// A* ranking: settle by `distance + manhattan(node, finish)`.
///
/// Manhattan distance never overestimates on a 4-connected unit-cost grid,
/// so the path found is a shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    #[inline]
    fn key(&self, node: &Node) -> u32 {
        node.total_distance
    }

    fn seed(&self, start: &mut Node) {
        start.distance = 0;
        start.heuristic_distance = 0;
        start.total_distance = 0;
    }

    fn improve(&self, node: &mut Node, distance: u32, finish: Point) {
        node.distance = distance;
        node.heuristic_distance = manhattan(node.pos(), finish);
        node.total_distance = distance + node.heuristic_distance;
    }
}

/// Run A* from `start` to `finish`.
///
/// Same contract as [`dijkstra`](crate::dijkstra): the settling order is
/// returned and back-links are left in the grid. Nodes that were reached
/// also carry `heuristic_distance` and `total_distance`.
pub fn astar(grid: &mut Grid, start: Point, finish: Point) -> Result<Vec<Point>, GridError> {
    search::best_first(grid, start, finish, &AStar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::path::path_from_finish;
    use labyrinth_core::UNREACHABLE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    type SearchFn = fn(&mut Grid, Point, Point) -> Result<Vec<Point>, GridError>;

    fn settle(g: &mut Grid, search: SearchFn) -> Vec<Point> {
        let (start, finish) = (g.start(), g.finish());
        search(g, start, finish).unwrap()
    }

    /// Plain BFS shortest-path node count, `None` when unreachable.
    fn bfs_path_len(g: &Grid) -> Option<usize> {
        let mut dist = vec![usize::MAX; g.len()];
        let mut queue = VecDeque::new();
        dist[g.start_index()] = 1;
        queue.push_back(g.start());
        while let Some(p) = queue.pop_front() {
            let d = dist[g.index(p)?];
            for n in p.neighbors_4() {
                if let Some(ni) = g.index(n) {
                    if !g.is_wall(n) && dist[ni] == usize::MAX {
                        dist[ni] = d + 1;
                        queue.push_back(n);
                    }
                }
            }
        }
        let d = dist[g.finish_index()];
        (d != usize::MAX).then_some(d)
    }

    fn random_grid(rng: &mut StdRng, rows: i32, cols: i32, density: f64) -> Grid {
        let mut g = Grid::with_endpoints(rows, cols, Point::new(0, 0), Point::new(rows - 1, cols - 1))
            .unwrap();
        for r in 0..rows {
            for c in 0..cols {
                if rng.random_bool(density) {
                    g.set_wall(Point::new(r, c), true);
                }
            }
        }
        g
    }

    fn found_len(g: &Grid) -> Option<usize> {
        g[g.finish()]
            .visited
            .then(|| path_from_finish(g, g.finish()).len())
    }

    #[test]
    fn start_is_seeded_with_zero_costs() {
        let mut g = Grid::with_endpoints(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        settle(&mut g, astar);
        let s = &g[g.start()];
        assert_eq!((s.distance, s.heuristic_distance, s.total_distance), (0, 0, 0));
        let f = &g[g.finish()];
        assert_eq!((f.distance, f.heuristic_distance, f.total_distance), (4, 0, 4));
    }

    #[test]
    fn total_is_distance_plus_heuristic() {
        let mut g = Grid::with_endpoints(6, 6, Point::new(0, 0), Point::new(0, 5)).unwrap();
        settle(&mut g, astar);
        for node in g.iter().filter(|n| n.is_reached() && !n.is_start()) {
            assert_eq!(node.heuristic_distance, manhattan(node.pos(), g.finish()));
            assert_eq!(node.total_distance, node.distance + node.heuristic_distance);
        }
        // Rows further than one step from the straight line are never reached.
        for node in g.iter().filter(|n| n.row() >= 2) {
            assert_eq!(node.total_distance, UNREACHABLE);
        }
    }

    #[test]
    fn visits_no_more_than_dijkstra_on_open_grid() {
        let mut g = Grid::with_endpoints(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap();
        let d = settle(&mut g, dijkstra);
        let a = settle(&mut g, astar);
        assert!(a.len() <= d.len());
        assert_eq!(path_from_finish(&g, g.finish()).len(), 9);
    }

    #[test]
    fn routes_through_the_only_opening() {
        let mut g = Grid::with_endpoints(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap();
        for r in [0, 1, 3, 4] {
            g.set_wall(Point::new(r, 2), true);
        }
        settle(&mut g, astar);
        let path = path_from_finish(&g, g.finish());
        assert!(path.contains(&Point::new(2, 2)));
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn agrees_with_dijkstra_and_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x1ab);
        for _ in 0..200 {
            let rows = rng.random_range(2..9);
            let cols = rng.random_range(2..9);
            let mut g = random_grid(&mut rng, rows, cols, 0.3);
            let expected = bfs_path_len(&g);

            let visited = settle(&mut g, dijkstra);
            assert!(visited.iter().all(|&p| !g.is_wall(p)));
            let by_dijkstra = found_len(&g);

            let visited = settle(&mut g, astar);
            assert!(visited.iter().all(|&p| !g.is_wall(p)));
            let by_astar = found_len(&g);

            assert_eq!(by_dijkstra, expected, "dijkstra on\n{g}");
            assert_eq!(by_astar, expected, "astar on\n{g}");
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = random_grid(&mut rng, 8, 8, 0.25);
        let first = settle(&mut g, astar);
        let first_path = path_from_finish(&g, g.finish());
        let second = settle(&mut g, astar);
        assert_eq!(first, second);
        assert_eq!(first_path, path_from_finish(&g, g.finish()));
    }
}
