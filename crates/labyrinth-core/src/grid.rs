//! The [`Grid`] type: a flat arena of [`Node`]s with one start and one finish.
//!
//! Nodes are stored row-major; a node's arena index is also what
//! [`Node::previous`] stores, so back-links never hold references into the
//! grid.
//!
//! Invariants upheld by every method:
//! - `nodes[i].pos() == dims.point(i)` for every index;
//! - exactly one start and one finish, never the same cell;
//! - neither endpoint is a wall.

use std::fmt;
use std::ops::Index;

use log::debug;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Dims, Point};
use crate::node::Node;

/// Default start position for the given dimensions: `(rows/2, cols/4)`.
pub fn default_start(dims: Dims) -> Point {
    Point::new(dims.rows / 2, dims.cols / 4)
}

/// Default finish position for the given dimensions: `(rows/2, cols*3/4)`.
pub fn default_finish(dims: Dims) -> Point {
    Point::new(dims.rows / 2, dims.cols * 3 / 4)
}

/// Move `finish` off `start` when they coincide: one column to the right,
/// wrapping, or one row down for single-column grids.
fn separate(dims: Dims, start: Point, finish: Point) -> Point {
    if start != finish {
        return finish;
    }
    if dims.cols > 1 {
        Point::new(finish.row, (finish.col + 1) % dims.cols)
    } else {
        Point::new((finish.row + 1) % dims.rows, finish.col)
    }
}

/// A rectangular grid of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    dims: Dims,
    nodes: Vec<Node>,
    start: usize,
    finish: usize,
}

impl Grid {
    /// Create an open grid with the default endpoints.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        check_dims(dims)?;
        let start = default_start(dims);
        let finish = separate(dims, start, default_finish(dims));
        Self::with_endpoints(rows, cols, start, finish)
    }

    /// Create an open grid with explicit endpoints.
    ///
    /// Out-of-bounds or coincident endpoints are rejected.
    pub fn with_endpoints(
        rows: i32,
        cols: i32,
        start: Point,
        finish: Point,
    ) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        check_dims(dims)?;
        let si = dims
            .index(start)
            .ok_or(GridError::OutOfBounds { pos: start, dims })?;
        let fi = dims
            .index(finish)
            .ok_or(GridError::OutOfBounds { pos: finish, dims })?;
        if si == fi {
            return Err(GridError::SameEndpoints(start));
        }
        let mut nodes: Vec<Node> = dims.iter().map(Node::new).collect();
        nodes[si].set_start(true);
        nodes[fi].set_finish(true);
        Ok(Self {
            dims,
            nodes,
            start: si,
            finish: fi,
        })
    }

    /// Create a grid from a [`GridConfig`], using the default endpoints
    /// where the configuration leaves them unset.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        let dims = Dims::new(config.rows, config.cols);
        check_dims(dims)?;
        let start = config.start.unwrap_or_else(|| default_start(dims));
        let finish = match config.finish {
            Some(f) => f,
            None => separate(dims, start, default_finish(dims)),
        };
        Self::with_endpoints(config.rows, config.cols, start, finish)
    }

    /// Parse a text layout: `.` open, `#` wall, `S` start, `F` finish.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: i,
                    expected: width,
                    found,
                });
            }
        }

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                    }
                    'F' => {
                        if finish.replace(pos).is_some() {
                            return Err(GridError::DuplicateFinish(pos));
                        }
                    }
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;

        let mut grid = Self::with_endpoints(lines.len() as i32, width as i32, start, finish)?;
        for p in walls {
            grid.set_wall(p, true);
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a grid holds at least its two endpoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.dims.index(p)
    }

    /// Point stored at arena index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.dims.point(idx)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.dims.contains(p)
    }

    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to a node. Only traversal fields are writable.
    #[inline]
    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        self.index(p).map(move |i| &mut self.nodes[i])
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Iterate over all nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.point(self.start)
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.point(self.finish)
    }

    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn finish_index(&self) -> usize {
        self.finish
    }

    /// Whether `p` is a wall. Out-of-bounds points are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.node(p).is_some_and(Node::is_wall)
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| !n.is_wall())
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall()).count()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Set or clear a wall. Returns whether the cell changed.
    ///
    /// Endpoints and out-of-bounds points are left alone.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.index(p) {
            Some(i) if !self.nodes[i].is_endpoint() && self.nodes[i].is_wall() != wall => {
                self.nodes[i].set_wall(wall);
                true
            }
            _ => false,
        }
    }

    /// Flip a wall, returning the new state. `None` for endpoints and
    /// out-of-bounds points.
    pub fn toggle_wall(&mut self, p: Point) -> Option<bool> {
        let i = self.index(p)?;
        let node = &mut self.nodes[i];
        if node.is_endpoint() {
            return None;
        }
        let wall = !node.is_wall();
        node.set_wall(wall);
        Some(wall)
    }

    /// Make every non-endpoint cell a wall (or open).
    pub fn fill_walls(&mut self, wall: bool) {
        for node in self.nodes.iter_mut().filter(|n| !n.is_endpoint()) {
            node.set_wall(wall);
        }
    }

    /// Open every cell.
    pub fn clear_walls(&mut self) {
        self.fill_walls(false);
    }

    /// Move the start to `p`, clearing any wall there.
    pub fn move_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.endpoint_target(p, self.finish)?;
        self.nodes[self.start].set_start(false);
        self.nodes[i].set_start(true);
        self.start = i;
        Ok(())
    }

    /// Move the finish to `p`, clearing any wall there.
    pub fn move_finish(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.endpoint_target(p, self.start)?;
        self.nodes[self.finish].set_finish(false);
        self.nodes[i].set_finish(true);
        self.finish = i;
        Ok(())
    }

    fn endpoint_target(&self, p: Point, other: usize) -> Result<usize, GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            dims: self.dims,
        })?;
        if i == other {
            return Err(GridError::EndpointOccupied(p));
        }
        Ok(i)
    }

    /// Clear the traversal state of every node. Walls and endpoints are kept.
    pub fn reset_traversal(&mut self) -> &mut Self {
        for node in &mut self.nodes {
            node.reset_traversal();
        }
        self
    }

    /// Replace the grid with a fresh open grid of new dimensions.
    ///
    /// The current endpoints are clamped into the new bounds; if clamping
    /// makes them collide the finish is moved aside.
    pub fn resize(&mut self, rows: i32, cols: i32) -> Result<(), GridError> {
        let dims = Dims::new(rows, cols);
        check_dims(dims)?;
        let start = dims.clamp(self.start());
        let finish = separate(dims, start, dims.clamp(self.finish()));
        debug!(
            "resize {} -> {}: start {} finish {}",
            self.dims, dims, start, finish
        );
        *self = Self::with_endpoints(rows, cols, start, finish)?;
        Ok(())
    }

    /// Replace the grid with a fresh open grid of the same dimensions and
    /// the default endpoints.
    pub fn reset(&mut self) -> Result<(), GridError> {
        *self = Self::new(self.rows(), self.cols())?;
        Ok(())
    }
}

/// Unchecked serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    dims: Dims,
    nodes: Vec<Node>,
    start: usize,
    finish: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        let GridRepr {
            dims,
            nodes,
            start,
            finish,
        } = repr;
        check_dims(dims)?;
        if nodes.len() != dims.len() {
            return Err(GridError::InvalidDimensions(dims));
        }
        for idx in [start, finish] {
            if idx >= nodes.len() {
                return Err(GridError::InvalidNode(idx));
            }
        }
        if start == finish {
            return Err(GridError::SameEndpoints(dims.point(start)));
        }
        for (i, n) in nodes.iter().enumerate() {
            let consistent = n.pos() == dims.point(i)
                && n.is_start() == (i == start)
                && n.is_finish() == (i == finish)
                && !(n.is_endpoint() && n.is_wall())
                && n.previous.is_none_or(|p| p < nodes.len());
            if !consistent {
                return Err(GridError::InvalidNode(i));
            }
        }
        Ok(Self {
            dims,
            nodes,
            start,
            finish,
        })
    }
}

fn check_dims(dims: Dims) -> Result<(), GridError> {
    if dims.is_empty() || dims.len() < 2 {
        return Err(GridError::InvalidDimensions(dims));
    }
    Ok(())
}

/// Clear the traversal state of every node of `grid` and hand it back.
pub fn reset_traversal_state(grid: &mut Grid) -> &mut Grid {
    grid.reset_traversal()
}

impl Index<Point> for Grid {
    type Output = Node;

    /// Panics when `p` is out of bounds, like slice indexing.
    fn index(&self, p: Point) -> &Node {
        match self.dims.index(p) {
            Some(i) => &self.nodes[i],
            None => panic!("point {p} out of bounds for {} grid", self.dims),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// Render the text layout accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.nodes.chunks(self.dims.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for node in row {
                let ch = if node.is_start() {
                    'S'
                } else if node.is_finish() {
                    'F'
                } else if node.is_wall() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::UNREACHABLE;

    fn count_roles(g: &Grid) -> (usize, usize) {
        let starts = g.iter().filter(|n| n.is_start()).count();
        let finishes = g.iter().filter(|n| n.is_finish()).count();
        (starts, finishes)
    }

    #[test]
    fn new_uses_default_endpoints() {
        let g = Grid::new(15, 31).unwrap();
        assert_eq!(g.start(), Point::new(7, 7));
        assert_eq!(g.finish(), Point::new(7, 23));
        assert_eq!(g.len(), 15 * 31);
        assert_eq!(count_roles(&g), (1, 1));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn positions_match_indices() {
        let g = Grid::new(4, 6).unwrap();
        for (i, node) in g.iter().enumerate() {
            assert_eq!(node.pos(), g.point(i));
            assert_eq!(g[node.pos()].pos(), node.pos());
        }
    }

    #[test]
    fn tiny_grids_separate_endpoints() {
        let g = Grid::new(1, 2).unwrap();
        assert_ne!(g.start(), g.finish());
        let g = Grid::new(3, 1).unwrap();
        assert_eq!(g.start(), Point::new(1, 0));
        assert_eq!(g.finish(), Point::new(2, 0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            Grid::new(1, 1),
            Err(GridError::InvalidDimensions(Dims::new(1, 1)))
        );
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(-3, 10).is_err());
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert_eq!(
            Grid::with_endpoints(5, 5, Point::new(2, 2), Point::new(2, 2)),
            Err(GridError::SameEndpoints(Point::new(2, 2)))
        );
        assert_eq!(
            Grid::with_endpoints(5, 5, Point::new(0, 0), Point::new(5, 0)),
            Err(GridError::OutOfBounds {
                pos: Point::new(5, 0),
                dims: Dims::new(5, 5)
            })
        );
    }

    #[test]
    fn from_config_fills_missing_endpoints() {
        let config = GridConfig {
            rows: 9,
            cols: 9,
            start: Some(Point::new(0, 0)),
            finish: None,
        };
        let g = Grid::from_config(&config).unwrap();
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.finish(), Point::new(4, 6));
        let g = Grid::from_config(&GridConfig::default()).unwrap();
        assert_eq!(g.dims(), Dims::new(15, 31));
    }

    #[test]
    fn walls_never_land_on_endpoints() {
        let mut g = Grid::with_endpoints(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(!g.set_wall(Point::new(0, 0), true));
        assert_eq!(g.toggle_wall(Point::new(2, 2)), None);
        assert_eq!(g.toggle_wall(Point::new(9, 9)), None);
        assert!(g.set_wall(Point::new(1, 1), true));
        assert!(!g.set_wall(Point::new(1, 1), true));
        assert_eq!(g.toggle_wall(Point::new(1, 1)), Some(false));
        g.fill_walls(true);
        assert_eq!(g.wall_count(), 7);
        assert!(g.is_open(g.start()));
        assert!(g.is_open(g.finish()));
        g.clear_walls();
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn moving_endpoints_keeps_one_of_each() {
        let mut g = Grid::with_endpoints(4, 4, Point::new(0, 0), Point::new(3, 3)).unwrap();
        g.set_wall(Point::new(1, 2), true);
        g.move_start(Point::new(1, 2)).unwrap();
        assert_eq!(g.start(), Point::new(1, 2));
        assert!(!g.is_wall(Point::new(1, 2)));
        assert!(!g[Point::new(0, 0)].is_start());
        assert_eq!(
            g.move_finish(Point::new(1, 2)),
            Err(GridError::EndpointOccupied(Point::new(1, 2)))
        );
        assert!(g.move_finish(Point::new(4, 0)).is_err());
        g.move_finish(Point::new(0, 0)).unwrap();
        assert_eq!(count_roles(&g), (1, 1));
        assert_eq!(g.finish_index(), 0);
    }

    #[test]
    fn reset_traversal_is_idempotent() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_wall(Point::new(0, 0), true);
        for node in g.nodes_mut() {
            node.visited = true;
            node.distance = 4;
            node.previous = Some(0);
            node.total_distance = 6;
            node.heuristic_distance = 2;
        }
        reset_traversal_state(&mut g);
        let once = g.clone();
        g.reset_traversal();
        assert_eq!(g, once);
        for node in &g {
            assert!(!node.visited);
            assert_eq!(node.distance, UNREACHABLE);
            assert_eq!(node.previous, None);
            assert_eq!(node.total_distance, UNREACHABLE);
            assert_eq!(node.heuristic_distance, UNREACHABLE);
        }
        assert!(g.is_wall(Point::new(0, 0)));
    }

    #[test]
    fn resize_clamps_and_separates() {
        let mut g = Grid::new(15, 31).unwrap();
        g.set_wall(Point::new(0, 0), true);
        g.resize(5, 5).unwrap();
        assert_eq!(g.dims(), Dims::new(5, 5));
        assert_eq!(g.start(), Point::new(4, 4));
        assert_eq!(g.finish(), Point::new(4, 0));
        assert_eq!(g.wall_count(), 0);
        assert!(g.resize(1, 1).is_err());
        assert_eq!(g.dims(), Dims::new(5, 5));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut g = Grid::new(9, 12).unwrap();
        g.move_start(Point::new(0, 0)).unwrap();
        g.set_wall(Point::new(3, 3), true);
        g.reset().unwrap();
        assert_eq!(g, Grid::new(9, 12).unwrap());
    }

    #[test]
    fn parse_and_display_round_trip() {
        let layout = "\
            S..#.
            .#.#.
            ...#F";
        let g = Grid::parse(layout).unwrap();
        assert_eq!(g.dims(), Dims::new(3, 5));
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.finish(), Point::new(2, 4));
        assert_eq!(g.wall_count(), 4);
        assert_eq!(g.to_string(), "S..#.\n.#.#.\n...#F");
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Grid::parse("S..\n.F"),
            Err(GridError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("S.x\n..F"),
            Err(GridError::InvalidRune {
                ch: 'x',
                pos: Point::new(0, 2)
            })
        );
        assert_eq!(Grid::parse("...\n..F"), Err(GridError::MissingStart));
        assert_eq!(Grid::parse("S..\n..."), Err(GridError::MissingFinish));
        assert_eq!(
            Grid::parse("S.S\n..F"),
            Err(GridError::DuplicateStart(Point::new(0, 2)))
        );
        assert_eq!(
            Grid::parse("S.F\n..F"),
            Err(GridError::DuplicateFinish(Point::new(1, 2)))
        );
    }
}
