//! One-call search runs with the statistics a visualizer shows.

use std::time::{Duration, Instant};

use labyrinth_core::{Grid, GridError, Point};
use log::debug;

use crate::algorithm::Algorithm;
use crate::path::path_from_finish;

/// Counters for a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Number of settled nodes.
    pub visited_count: usize,
    /// Number of nodes on the path, 0 when none was found.
    pub path_length: usize,
    /// Wall-clock time of search plus reconstruction.
    pub elapsed: Duration,
}

/// The outcome of running one algorithm between a grid's endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    pub algorithm: Algorithm,
    pub start: Point,
    pub finish: Point,
    /// Settling order.
    pub visited: Vec<Point>,
    /// Start-to-finish path, empty when the finish is unreachable.
    pub path: Vec<Point>,
    pub stats: Stats,
}

impl Search {
    /// Whether the finish was settled.
    pub fn found(&self) -> bool {
        self.visited.last() == Some(&self.finish)
    }
}

/// Run `algorithm` from the grid's start to its finish and reconstruct the
/// path.
pub fn visualize(grid: &mut Grid, algorithm: Algorithm) -> Result<Search, GridError> {
    let start = grid.start();
    let finish = grid.finish();

    let timer = Instant::now();
    let visited = algorithm.search(grid, start, finish)?;
    let path = if grid[finish].visited {
        path_from_finish(grid, finish)
    } else {
        Vec::new()
    };
    let elapsed = timer.elapsed();

    let stats = Stats {
        visited_count: visited.len(),
        path_length: path.len(),
        elapsed,
    };
    debug!(
        "{algorithm}: visited {} nodes, path {} nodes in {:?}",
        stats.visited_count, stats.path_length, stats.elapsed
    );
    Ok(Search {
        algorithm,
        start,
        finish,
        visited,
        path,
        stats,
    })
}
