//! whiff - line-heuristic code smell detection CLI
//!
//! Scans a single source file for Long Method, Long Parameter List, and
//! Duplicated Code smells using paren/brace line heuristics.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use whiff::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging: RUST_LOG wins, --log-level is the fallback.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    cli::run(cli)
}
