use labyrinth_core::{Node, Point};

/// What distinguishes one best-first search from another.
///
/// The shared engine settles nodes in increasing [`key`](Strategy::key)
/// order and calls [`improve`](Strategy::improve) whenever a node is reached
/// with a strictly smaller distance than it had.
pub trait Strategy {
    /// Ranking key of a node; smaller keys settle first.
    fn key(&self, node: &Node) -> u32;

    /// Prepare the start node. Its distance must become 0.
    fn seed(&self, start: &mut Node);

    /// Record the better `distance` on `node`. The engine sets
    /// `node.previous` itself.
    fn improve(&self, node: &mut Node, distance: u32, finish: Point);
}
