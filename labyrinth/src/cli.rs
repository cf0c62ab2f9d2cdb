//! Command-line options.
//!
//! Flags override the values of the `--config` file, which override the
//! built-in defaults.
//!
//! # Examples
//!
//! Carve a reproducible maze and compare both searches on it:
//!
//! ```text
//! $ labyrinth --maze --seed 7 --compare
//! ```
//!
//! Search a hand-drawn layout with A*:
//!
//! ```text
//! $ labyrinth --layout walls.txt --algorithm astar
//! ```

use std::path::PathBuf;

use clap::Parser;
use labyrinth_core::Point;
use labyrinth_paths::Algorithm;

use crate::config::Config;

/// Visualize Dijkstra and A* searches on grids and mazes.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Number of rows
    #[arg(short, long)]
    pub rows: Option<i32>,

    /// Number of columns
    #[arg(short, long)]
    pub cols: Option<i32>,

    /// Start node as ROW,COL
    #[arg(short, long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Finish node as ROW,COL
    #[arg(short, long, value_parser = parse_point)]
    pub finish: Option<Point>,

    /// Text layout to load (`.` open, `#` wall, `S` start, `F` finish)
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search algorithm: dijkstra or astar
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Run every algorithm on the same grid
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Carve a maze before searching
    #[arg(short, long, default_value_t = false)]
    pub maze: bool,

    /// Seed for maze generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of the grid
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if self.start.is_some() {
            config.grid.start = self.start;
        }
        if self.finish.is_some() {
            config.grid.finish = self.finish;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if self.maze {
            config.maze = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

/// Parse `ROW,COL`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row \u{201c}{row}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column \u{201c}{col}\u{201d}: {e}"))?;
    Ok(Point::new(row, col))
}
