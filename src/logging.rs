//! Logger setup shared by the binaries.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Where log records go.
pub enum LogTarget<'a> {
    /// Standard error (headless driver; stdout carries the protocol).
    Stderr,
    /// Append to a file (terminal game; stderr would tear the screen).
    File(&'a Path),
}

/// Install `env_logger`. `RUST_LOG` overrides the default `info` filter.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_default_env();

    if let LogTarget::File(path) = target {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("a logger is already installed")?;
    Ok(())
}
