//! The [`Node`] type: one grid cell with its role and traversal state.

use crate::geom::Point;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

/// A single grid cell.
///
/// Role flags (`start`, `finish`, `wall`) are owned by [`Grid`](crate::Grid)
/// and only change through its methods. Traversal fields are public so that
/// search algorithms can record their progress; [`reset_traversal`](Node::reset_traversal)
/// puts them back to the unreached state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    start: bool,
    finish: bool,
    wall: bool,
    /// Whether a search has settled this node.
    pub visited: bool,
    /// Best known cost from the start, [`UNREACHABLE`] when unknown.
    pub distance: u32,
    /// Arena index of the node this one was reached from.
    pub previous: Option<usize>,
    /// A* only: `distance + heuristic_distance`.
    pub total_distance: u32,
    /// A* only: estimated cost to the finish.
    pub heuristic_distance: u32,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            start: false,
            finish: false,
            wall: false,
            visited: false,
            distance: UNREACHABLE,
            previous: None,
            total_distance: UNREACHABLE,
            heuristic_distance: UNREACHABLE,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub fn is_finish(&self) -> bool {
        self.finish
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.wall
    }

    /// Whether the node is the start or the finish.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        self.start || self.finish
    }

    /// Whether a search has given this node a finite distance.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Clear every traversal field. Role flags are left untouched.
    #[inline]
    pub fn reset_traversal(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.previous = None;
        self.total_distance = UNREACHABLE;
        self.heuristic_distance = UNREACHABLE;
    }

    pub(crate) fn set_start(&mut self, start: bool) {
        self.start = start;
        if start {
            self.wall = false;
        }
    }

    pub(crate) fn set_finish(&mut self, finish: bool) {
        self.finish = finish;
        if finish {
            self.wall = false;
        }
    }

    pub(crate) fn set_wall(&mut self, wall: bool) {
        self.wall = wall;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unreached() {
        let n = Node::new(Point::new(3, 4));
        assert_eq!(n.pos(), Point::new(3, 4));
        assert_eq!((n.row(), n.col()), (3, 4));
        assert!(!n.visited);
        assert!(!n.is_reached());
        assert_eq!(n.previous, None);
        assert_eq!(n.total_distance, UNREACHABLE);
        assert_eq!(n.heuristic_distance, UNREACHABLE);
    }

    #[test]
    fn reset_keeps_roles() {
        let mut n = Node::new(Point::new(0, 0));
        n.set_wall(true);
        n.visited = true;
        n.distance = 3;
        n.previous = Some(7);
        n.reset_traversal();
        assert!(n.is_wall());
        assert!(!n.visited);
        assert_eq!(n.distance, UNREACHABLE);
        assert_eq!(n.previous, None);
    }

    #[test]
    fn endpoints_clear_walls() {
        let mut n = Node::new(Point::new(1, 1));
        n.set_wall(true);
        n.set_start(true);
        assert!(n.is_start());
        assert!(!n.is_wall());
        assert!(n.is_endpoint());
    }
}
