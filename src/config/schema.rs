//! YAML schema for the learner demo configuration

use crate::data::BlobSpec;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Complete learner configuration
///
/// Every field has a default, so an empty document is a valid config.
///
/// ```yaml
/// epochs: 10
/// batch_size: 32
/// learning_rate: 0.05
/// grad_clip: 1.0
/// data:
///   classes: 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Epochs passed to `fit`
    pub epochs: usize,

    /// Rows per batch for both datasets
    pub batch_size: usize,

    /// SGD learning rate
    pub learning_rate: f32,

    /// SGD momentum; 0 disables it
    pub momentum: f32,

    /// Width of the hidden layer
    pub hidden_size: usize,

    /// Training batches between progress lines; 0 disables them
    pub log_interval: usize,

    /// Maximum gradient L2 norm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grad_clip: Option<f32>,

    /// Leave parameters untouched during the validation pass
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub freeze_during_validation: bool,

    /// Train against one-hot rows instead of class indices
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub one_hot: bool,

    /// Seed for data generation and weight init
    pub seed: u64,

    /// Synthetic dataset shape
    pub data: BlobSpec,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            epochs: 5,
            batch_size: 64,
            learning_rate: 0.1,
            momentum: 0.9,
            hidden_size: 32,
            log_interval: 10,
            grad_clip: None,
            freeze_during_validation: false,
            one_hot: false,
            seed: 42,
            data: BlobSpec::default(),
        }
    }
}

impl LearnerConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Set epochs
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set learning rate
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set momentum
    pub fn with_momentum(mut self, momentum: f32) -> Self {
        self.momentum = momentum;
        self
    }

    /// Set hidden layer width
    pub fn with_hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }

    /// Enable gradient clipping
    pub fn with_grad_clip(mut self, max_norm: f32) -> Self {
        self.grad_clip = Some(max_norm);
        self
    }

    /// Train on one-hot targets
    pub fn with_one_hot(mut self, one_hot: bool) -> Self {
        self.one_hot = one_hot;
        self
    }

    /// Freeze parameters during validation
    pub fn with_freeze_during_validation(mut self, freeze: bool) -> Self {
        self.freeze_during_validation = freeze;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set dataset shape
    pub fn with_data(mut self, data: BlobSpec) -> Self {
        self.data = data;
        self
    }
}
