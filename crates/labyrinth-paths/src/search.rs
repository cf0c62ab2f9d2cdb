use std::collections::BinaryHeap;

use labyrinth_core::{Grid, GridError, Point};
use log::{debug, trace};

use crate::neighbors::Neighbors;
use crate::traits::Strategy;

// ---------------------------------------------------------------------------
// Open-list entry
// ---------------------------------------------------------------------------

/// Reference into the node arena, ordered for use in `BinaryHeap`.
///
/// `seq` is a push counter: among equal keys the entry pushed first pops
/// first, which makes every search deterministic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: u32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Run a best-first search from `start` until `finish` is settled or no
/// reachable node is left, returning the settled points in order.
///
/// Traversal state is reset first. Only reached nodes ever enter the open
/// list, so an exhausted list means every remaining node is at infinity.
/// Walls may be reached and queued but are discarded when popped: they are
/// never settled and never relax their neighbours.
pub fn best_first<S: Strategy>(
    grid: &mut Grid,
    start: Point,
    finish: Point,
    strategy: &S,
) -> Result<Vec<Point>, GridError> {
    let dims = grid.dims();
    let si = grid
        .index(start)
        .ok_or(GridError::OutOfBounds { pos: start, dims })?;
    let fi = grid
        .index(finish)
        .ok_or(GridError::OutOfBounds { pos: finish, dims })?;

    grid.reset_traversal();
    let nodes = grid.nodes_mut();
    strategy.seed(&mut nodes[si]);

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: si,
        key: strategy.key(&nodes[si]),
        seq,
    });

    let mut order = Vec::new();
    let mut nbuf = Neighbors::new();

    while let Some(current) = open.pop() {
        let ci = current.idx;
        let cn = &nodes[ci];

        // Skip stale entries.
        if cn.visited || current.key != strategy.key(cn) {
            continue;
        }
        if cn.is_wall() {
            trace!("discarding wall {}", cn.pos());
            continue;
        }

        let current_distance = cn.distance;
        let cp = cn.pos();
        nodes[ci].visited = true;
        order.push(cp);
        if ci == fi {
            break;
        }

        for &np in nbuf.cardinal(cp, |p| dims.contains(p)) {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.visited {
                continue;
            }
            let tentative = current_distance + 1;
            if tentative >= n.distance {
                continue;
            }
            strategy.improve(n, tentative, finish);
            n.previous = Some(ci);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                key: strategy.key(n),
                seq,
            });
        }
    }

    debug!(
        "search {} -> {}: settled {} of {} nodes, finish {}",
        start,
        finish,
        order.len(),
        nodes.len(),
        if nodes[fi].visited { "reached" } else { "unreachable" }
    );
    Ok(order)
}
