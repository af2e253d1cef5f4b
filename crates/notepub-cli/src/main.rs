//! notepub
//!
//! Scan a notes directory and publish the public parts into a site tree.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::ErrorKind;

use anyhow::{Context, Result};
use clap::Parser;
use notepub_cli::{commands, logging, Args, CliConfig};
use notepub_publish::Publisher;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = CliConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&args);
    tracing::debug!(notes_dir = %config.paths.notes_dir.display(), "Configuration loaded");

    let mut publisher = Publisher::new(config.publisher());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::execute(&args.action(), &mut publisher, &mut out) {
        // Downstream closed the pipe (e.g. `| head`)
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write output"),
    }
}
