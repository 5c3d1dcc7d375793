//! Loading configuration files from disk

use super::schema::LearnerConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and validate a configuration file
///
/// # Example
///
/// ```no_run
/// use aprendiz::config::load_config;
///
/// let config = load_config("learner.yaml")?;
/// println!("{} epochs", config.epochs);
/// # Ok::<(), aprendiz::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<LearnerConfig> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = LearnerConfig::from_yaml_str(&yaml_content)?;
    validate_config(&config).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
