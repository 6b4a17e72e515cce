//! Entry point for the flipbook viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml` (or `--config`).
//! - Build the page table and session, then launch the GUI.

mod app;
mod config;
mod preload;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, bail};
use flipbook_core::{BookSession, build_states};
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: flipbook [--config <path>] [--states]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config_path: PathBuf,
    print_states: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_states {
        let states = build_states(config.page_count).context("Invalid page count in config")?;
        println!("{}", serde_json::to_string_pretty(&states)?);
        return Ok(());
    }

    let resources = config
        .page_resources()
        .context("Invalid book configuration")?;
    let session = BookSession::new(config.page_count, config.flip_tuning())
        .context("Invalid animation configuration")?;
    info!(
        config = %args.config_path.display(),
        pages = config.page_count,
        first_page = %resources.uri(flipbook_core::PageIndex::FIRST),
        level = %config.log_level,
        "Starting flipbook viewer"
    );
    run_app(config, resources, session).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        config_path: PathBuf::from("conf/config.toml"),
        print_states: false,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config needs a path\n{USAGE}");
                };
                parsed.config_path = PathBuf::from(path);
            }
            "--states" => parsed.print_states = true,
            "-h" | "--help" => bail!("{USAGE}"),
            other => bail!("Unexpected argument: {other}\n{USAGE}"),
        }
    }
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(move |filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
