//! Error types for the training engine
//!
//! Control-flow requests from delegates (skip a batch, skip an epoch, stop)
//! are not errors; they travel as [`crate::train::DelegateAction`]. Everything
//! in this enum is fatal to a `fit` call and propagates to its caller.

use thiserror::Error;

/// Result type alias for aprendiz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the learner and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    #[error("Shape mismatch in {context}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        context: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Loss error: {0}")]
    Loss(String),

    #[error("Optimizer error: {0}")]
    Optimizer(String),

    #[error("Delegate '{name}' failed: {message}")]
    Delegate { name: String, message: String },

    #[error("No current batch: {0} requires an input and a target")]
    MissingBatch(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Build a delegate failure from a delegate name and message
    pub fn delegate(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delegate {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Build a shape mismatch error
    pub fn shape(context: &'static str, expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            context,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}
