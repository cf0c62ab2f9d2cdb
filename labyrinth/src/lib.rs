//! Labyrinth: a command-line front end for the grid search visualizer.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use app::execute;
pub use cli::Args;
pub use config::{Config, ConfigError};
