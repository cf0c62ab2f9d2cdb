//! Grid construction settings.

use crate::geom::Point;

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 15;
/// Default number of columns.
pub const DEFAULT_COLS: i32 = 31;

/// Dimensions and optional endpoints for building a [`Grid`](crate::Grid).
///
/// Unset endpoints fall back to [`default_start`](crate::grid::default_start)
/// and [`default_finish`](crate::grid::default_finish).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Option<Point>,
    pub finish: Option<Point>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: None,
            finish: None,
        }
    }
}
