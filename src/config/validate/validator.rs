//! Configuration validation logic
//!
//! Validates learner configurations for correctness before training.

use super::error::ValidationError;
use crate::config::schema::LearnerConfig;

/// Validate a learner configuration
///
/// Checks that numeric values are in range; returns the first violation.
/// `epochs: 0` is accepted and runs only the training start and finish hooks.
pub fn validate_config(config: &LearnerConfig) -> Result<(), ValidationError> {
    if config.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(config.batch_size));
    }

    let lr = config.learning_rate;
    if lr.is_nan() || lr <= 0.0 || lr > 1.0 {
        return Err(ValidationError::InvalidLearningRate(config.learning_rate));
    }

    if !(0.0..1.0).contains(&config.momentum) {
        return Err(ValidationError::InvalidMomentum(config.momentum));
    }

    if config.hidden_size == 0 {
        return Err(ValidationError::InvalidHiddenSize(config.hidden_size));
    }

    if let Some(grad_clip) = config.grad_clip {
        if grad_clip.is_nan() || grad_clip <= 0.0 {
            return Err(ValidationError::InvalidGradClip(grad_clip));
        }
    }

    let data = &config.data;
    if data.classes < 2 {
        return Err(ValidationError::InvalidClasses(data.classes));
    }
    if data.features == 0 {
        return Err(ValidationError::InvalidFeatures(data.features));
    }
    if !(data.spread.is_finite() && data.spread >= 0.0) {
        return Err(ValidationError::InvalidSpread(data.spread));
    }

    Ok(())
}
