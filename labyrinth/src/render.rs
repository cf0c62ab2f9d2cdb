//! Text rendering of search results.

use std::fmt::Write as _;

use labyrinth_core::Grid;
use labyrinth_paths::{Search, Step};
use serde::Serialize;

pub const VISITED: char = 'o';
pub const PATH: char = '*';

/// Draw `grid` with the visits and path of `search` laid over it.
///
/// Endpoints and walls keep their layout characters.
pub fn render(grid: &Grid, search: &Search) -> String {
    let mut marks: Vec<Option<char>> = vec![None; grid.len()];
    for step in search.replay() {
        let mark = match step {
            Step::Visit(_) => VISITED,
            Step::Path(_) => PATH,
        };
        if let Some(i) = grid.index(step.pos()) {
            marks[i] = Some(mark);
        }
    }

    let layout = grid.to_string();
    let mut out = String::with_capacity(layout.len());
    let mut i = 0;
    for ch in layout.chars() {
        if ch == '\n' {
            out.push(ch);
            continue;
        }
        out.push(if ch == '.' { marks[i].unwrap_or(ch) } else { ch });
        i += 1;
    }
    out
}

/// One line of statistics, e.g. `A*: visited 42 nodes, path 17 nodes (1.2ms)`.
pub fn stats_line(search: &Search) -> String {
    let mut line = format!("{}: visited {} nodes, ", search.algorithm, search.stats.visited_count);
    if search.found() {
        let _ = write!(line, "path {} nodes", search.stats.path_length);
    } else {
        line.push_str("no path");
    }
    let _ = write!(line, " ({:?})", search.stats.elapsed);
    line
}

/// Machine-readable output of a run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// The searched grid in text layout form.
    pub layout: String,
    pub searches: &'a [Search],
}

impl<'a> Report<'a> {
    pub fn new(grid: &Grid, searches: &'a [Search]) -> Self {
        Self {
            layout: grid.to_string(),
            searches,
        }
    }
}
