//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid momentum: {0} (must be in [0.0, 1.0))")]
    InvalidMomentum(f32),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid hidden size: {0} (must be > 0)")]
    InvalidHiddenSize(usize),

    #[error("Invalid gradient clip value: {0} (must be > 0.0)")]
    InvalidGradClip(f32),

    #[error("Invalid class count: {0} (must be >= 2)")]
    InvalidClasses(usize),

    #[error("Invalid feature count: {0} (must be > 0)")]
    InvalidFeatures(usize),

    #[error("Invalid blob spread: {0} (must be finite and >= 0.0)")]
    InvalidSpread(f32),
}
