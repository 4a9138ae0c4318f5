#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;

use std::path::Path;

use args::Args;
use clap::Parser;
use errorcode_config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = load_config(args.config.as_deref())?;

    // Initialize logging; nothing before this point is logged
    errorcode_telemetry::init(&config.log, args.log_filter.as_deref())?;

    tracing::debug!(
        config_path = ?args.config,
        log_format = %config.log.format,
        configured_templates = config.catalog.templates.len(),
        "loaded configuration"
    );

    let catalog = config.catalog()?;
    tracing::debug!(templates = catalog.len(), "catalog ready");

    let output = commands::run(&args.command, &catalog)?;
    println!("{output}");

    Ok(())
}

/// Configuration from `path`, or the defaults when no file is given
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
