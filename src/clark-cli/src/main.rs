//! Clark CLI - Main entry point.

use anyhow::Result;
use clap::Parser;

use clark_cli::cli::{Cli, dispatch_command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    dispatch_command(Cli::parse())
}
