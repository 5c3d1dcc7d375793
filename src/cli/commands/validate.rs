//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::{load_config, LearnerConfig};

/// Format the learner settings as indented lines
pub fn format_config_info(config: &LearnerConfig) -> String {
    let mut lines = vec![
        format!("  Epochs: {}", config.epochs),
        format!("  Batch size: {}", config.batch_size),
        format!(
            "  Optimizer: sgd (lr={}, momentum={})",
            config.learning_rate, config.momentum
        ),
        format!("  Hidden size: {}", config.hidden_size),
    ];
    if let Some(clip) = config.grad_clip {
        lines.push(format!("  Gradient clipping: {clip}"));
    }
    if config.freeze_during_validation {
        lines.push("  Validation: frozen".to_string());
    }
    lines.push(format!(
        "  Data: {} train / {} valid, {} features, {} classes{}",
        config.data.train_samples,
        config.data.valid_samples,
        config.data.features,
        config.data.classes,
        if config.one_hot { " (one-hot)" } else { "" }
    ));
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "✓ Configuration is valid");
    log(level, LogLevel::Verbose, &format_config_info(&config));
    Ok(())
}
