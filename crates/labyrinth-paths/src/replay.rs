//! Replay ordering for visualizers.
//!
//! A [`Replay`] walks a [`Search`] in the order a front end would animate
//! it: every settled node, then every path node. The endpoints are skipped
//! in both phases because they keep their own markers. Pacing is left to
//! the caller.

use std::slice;

use labyrinth_core::Point;

use crate::report::Search;

/// One replay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// A node was settled by the search.
    Visit(Point),
    /// A node lies on the reconstructed path.
    Path(Point),
}

impl Step {
    pub fn pos(self) -> Point {
        match self {
            Self::Visit(p) | Self::Path(p) => p,
        }
    }
}

/// Iterator over the replay steps of a [`Search`].
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    visited: slice::Iter<'a, Point>,
    path: slice::Iter<'a, Point>,
    start: Point,
    finish: Point,
}

impl<'a> Replay<'a> {
    pub fn new(search: &'a Search) -> Self {
        Self {
            visited: search.visited.iter(),
            path: search.path.iter(),
            start: search.start,
            finish: search.finish,
        }
    }

    fn is_endpoint(&self, p: Point) -> bool {
        p == self.start || p == self.finish
    }
}

impl Iterator for Replay<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        while let Some(&p) = self.visited.next() {
            if !self.is_endpoint(p) {
                return Some(Step::Visit(p));
            }
        }
        while let Some(&p) = self.path.next() {
            if !self.is_endpoint(p) {
                return Some(Step::Path(p));
            }
        }
        None
    }
}

impl Search {
    /// Replay steps for this search.
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::report::visualize;
    use labyrinth_core::Grid;

    #[test]
    fn visits_come_before_path_and_skip_endpoints() {
        let mut g = Grid::with_endpoints(1, 4, Point::new(0, 0), Point::new(0, 3)).unwrap();
        let search = visualize(&mut g, Algorithm::Dijkstra).unwrap();
        let steps: Vec<Step> = search.replay().collect();
        assert_eq!(
            steps,
            vec![
                Step::Visit(Point::new(0, 1)),
                Step::Visit(Point::new(0, 2)),
                Step::Path(Point::new(0, 1)),
                Step::Path(Point::new(0, 2)),
            ]
        );
    }

    #[test]
    fn failed_search_replays_visits_only() {
        let mut g = Grid::parse(
            "S.#F
             ..#.",
        )
        .unwrap();
        let search = visualize(&mut g, Algorithm::AStar).unwrap();
        let steps: Vec<Step> = search.replay().collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| matches!(s, Step::Visit(_))));
        assert!(!steps.iter().any(|s| s.pos() == g.start()));
    }
}
