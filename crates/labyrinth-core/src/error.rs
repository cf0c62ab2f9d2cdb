//! Errors raised when a caller breaks the grid contract.

use std::fmt;

use crate::geom::{Dims, Point};

/// Errors that can occur when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid cannot hold two distinct endpoints.
    InvalidDimensions(Dims),
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Point, dims: Dims },
    /// Start and finish were given the same cell.
    SameEndpoints(Point),
    /// An endpoint cannot move onto the other endpoint.
    EndpointOccupied(Point),
    /// Layout lines have inconsistent widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// A character outside `.#SF` was found in a layout.
    InvalidRune { ch: char, pos: Point },
    /// The layout has no `S`.
    MissingStart,
    /// The layout has no `F`.
    MissingFinish,
    /// The layout has more than one `S`.
    DuplicateStart(Point),
    /// The layout has more than one `F`.
    DuplicateFinish(Point),
    /// A decoded node contradicts the grid it belongs to.
    InvalidNode(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions(dims) => {
                write!(f, "grid: dimensions {dims} cannot hold a start and a finish")
            }
            Self::OutOfBounds { pos, dims } => {
                write!(f, "grid: point {pos} is outside the {dims} grid")
            }
            Self::SameEndpoints(p) => write!(f, "grid: start and finish both at {p}"),
            Self::EndpointOccupied(p) => {
                write!(f, "grid: {p} is already taken by the other endpoint")
            }
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "layout: no start cell (S)"),
            Self::MissingFinish => write!(f, "layout: no finish cell (F)"),
            Self::DuplicateStart(p) => write!(f, "layout: second start cell at {p}"),
            Self::DuplicateFinish(p) => write!(f, "layout: second finish cell at {p}"),
            Self::InvalidNode(i) => write!(f, "grid: node {i} is inconsistent with the grid"),
        }
    }
}

impl std::error::Error for GridError {}
