//! CLI command implementations

mod fit;
mod validate;

pub use fit::run_fit;

use crate::cli::{Cli, Command, LogLevel};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Fit(args) => fit::run_fit_command(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
