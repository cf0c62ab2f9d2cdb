use labyrinth_core::{Grid, Point};
use log::warn;

/// Rebuild the path ending at `finish` by following `previous` back-links.
///
/// The result runs from the first node without a back-link (the start,
/// after a successful search) to `finish`, both included. A finish that was
/// never reached yields `[finish]`, so a one-node path that is not the start
/// means "no path". An out-of-bounds `finish` yields an empty path.
pub fn path_from_finish(grid: &Grid, finish: Point) -> Vec<Point> {
    let Some(mut ci) = grid.index(finish) else {
        return Vec::new();
    };

    let mut path = vec![finish];
    while let Some(pi) = grid.nodes()[ci].previous {
        if pi >= grid.len() || path.len() >= grid.len() {
            warn!("broken back-link chain at {}, path truncated", grid.point(ci));
            break;
        }
        path.push(grid.point(pi));
        ci = pi;
    }
    path.reverse();
    path
}
