//! CLI argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aprendiz: delegate-driven training loop
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "aprendiz")]
#[command(version)]
#[command(about = "Train a small classifier with a delegate-driven training loop")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Train the sample network on synthetic blobs
    Fit(FitArgs),

    /// Validate a configuration file without training
    Validate(ValidateArgs),
}

/// Arguments for the fit command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct FitArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override number of epochs
    #[arg(short, long)]
    pub epochs: Option<usize>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override learning rate
    #[arg(short, long)]
    pub lr: Option<f32>,

    /// Train against one-hot targets
    #[arg(long)]
    pub one_hot: bool,

    /// Emit per-epoch metrics and the summary as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fit_defaults() {
        let cli = parse_args(["aprendiz", "fit"]).unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.config, None);
        assert_eq!(args.epochs, None);
        assert!(!args.one_hot);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_fit_overrides() {
        let cli = parse_args([
            "aprendiz", "fit", "--config", "c.yaml", "--epochs", "3", "--batch-size", "8",
            "--lr", "0.01", "--one-hot", "--json", "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.config, Some(PathBuf::from("c.yaml")));
        assert_eq!(args.epochs, Some(3));
        assert_eq!(args.batch_size, Some(8));
        assert_eq!(args.lr, Some(0.01));
        assert!(args.one_hot);
        assert!(args.json);
    }

    #[test]
    fn test_parse_validate() {
        let cli = parse_args(["aprendiz", "validate", "learner.yaml", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Validate(ValidateArgs {
                config: PathBuf::from("learner.yaml")
            })
        );
    }

    #[test]
    fn test_validate_requires_path() {
        assert!(parse_args(["aprendiz", "validate"]).is_err());
    }
}
