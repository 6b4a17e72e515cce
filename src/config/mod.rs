//! Configuration loading for the flipbook viewer.
//!
//! Settings are read from `conf/config.toml` (or the path given with
//! `--config`). Missing or invalid entries fall back to defaults so the book
//! always opens.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
