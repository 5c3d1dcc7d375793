//! CLI module for aprendiz
//!
//! Argument parsing and the `fit` / `validate` command handlers.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, FitArgs, ValidateArgs};
pub use commands::{run_command, run_fit};
pub use logging::LogLevel;
