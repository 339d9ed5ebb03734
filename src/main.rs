//! Entry point for the portfolio deck viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application with the resolved asset directory.

mod app;
mod assets;
mod config;
mod deck;
mod metadata;
mod nav;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    let assets_dir = parse_args(&config.assets_dir)?;
    info!(
        assets = %assets_dir.display(),
        theme = %config.theme,
        level = %config.log_level,
        "Starting portfolio viewer"
    );
    run_app(config, assets_dir).context("Failed to start the GUI")?;
    Ok(())
}

/// An optional positional argument overrides the configured asset directory.
fn parse_args(configured: &str) -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| configured.to_string()));
    if args.next().is_some() {
        return Err(anyhow!("Usage: foliodeck [assets-dir]"));
    }
    if !path.is_dir() {
        // Missing artwork degrades to colored artboards, so only warn.
        warn!(path = %path.display(), "Asset directory not found; using fallback backgrounds");
    }
    Ok(path)
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
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
