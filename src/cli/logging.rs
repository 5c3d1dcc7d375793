//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Pick the level from the global `--quiet` / `--verbose` flags
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(LogLevel::Quiet.filter_directive(), "error");
        assert_eq!(LogLevel::Normal.filter_directive(), "info");
        assert_eq!(LogLevel::Verbose.filter_directive(), "debug");
    }
}
