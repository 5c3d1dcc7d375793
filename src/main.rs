//! Aprendiz CLI
//!
//! # Usage
//!
//! ```bash
//! # Train the sample network with defaults
//! aprendiz fit
//!
//! # Train from config with overrides
//! aprendiz fit --config learner.yaml --epochs 10 --lr 0.05
//!
//! # Machine-readable metrics
//! aprendiz fit --json --one-hot
//!
//! # Validate config
//! aprendiz validate learner.yaml
//! ```

use aprendiz::cli::{run_command, Cli, LogLevel};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
