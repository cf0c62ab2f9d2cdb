//! Turning parsed options into a finished run.

use std::error::Error;
use std::fs;

use labyrinth_core::{Grid, GridError};
use labyrinth_maze::MazeGen;
use labyrinth_paths::{Algorithm, Search, visualize};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Args;
use crate::config::{Config, ConfigError};
use crate::render::{Report, render, stats_line};

/// Resolve the configuration: defaults, then `--config`, then flags.
pub fn resolve_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply(&mut config);
    Ok(config)
}

/// Build the grid to search, carving a maze if asked to.
///
/// A `--layout` file defines size, walls and endpoints; `--start` and
/// `--finish` still move its endpoints.
pub fn build_grid(args: &Args, config: &Config) -> Result<Grid, Box<dyn Error>> {
    let mut grid = match &args.layout {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let mut grid = Grid::parse(&text)?;
            if let Some(p) = args.start {
                grid.move_start(p)?;
            }
            if let Some(p) = args.finish {
                grid.move_finish(p)?;
            }
            grid
        }
        None => Grid::from_config(&config.grid)?,
    };

    if config.maze {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        grid = MazeGen::with_rng(rng).kruskal(&grid);
        info!("carved a {} maze with {} walls", grid.dims(), grid.wall_count());
    }
    Ok(grid)
}

/// Run the configured algorithm, or every algorithm when `compare` is set.
pub fn run_searches(
    grid: &mut Grid,
    algorithm: Algorithm,
    compare: bool,
) -> Result<Vec<Search>, GridError> {
    let algorithms = if compare { Algorithm::ALL.to_vec() } else { vec![algorithm] };
    let mut searches = Vec::with_capacity(algorithms.len());
    for alg in algorithms {
        searches.push(visualize(grid, alg)?);
    }
    Ok(searches)
}

/// Everything the binary prints for `args`.
pub fn execute(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = resolve_config(args)?;
    debug!("configuration: {config:?}");
    let mut grid = build_grid(args, &config)?;
    let searches = run_searches(&mut grid, config.algorithm, args.compare)?;

    if args.json {
        return Ok(serde_json::to_string_pretty(&Report::new(&grid, &searches))?);
    }
    let blocks: Vec<String> = searches
        .iter()
        .map(|search| format!("{}\n{}", render(&grid, search), stats_line(search)))
        .collect();
    Ok(blocks.join("\n\n"))
}
