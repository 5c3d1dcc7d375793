//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::LearnerConfig;

#[test]
fn test_valid_config() {
    assert!(validate_config(&LearnerConfig::default()).is_ok());
}

#[test]
fn test_zero_epochs_is_valid() {
    let config = LearnerConfig::default().with_epochs(0);
    assert_eq!(validate_config(&config), Ok(()));
}

#[test]
fn test_invalid_batch_size() {
    let config = LearnerConfig::default().with_batch_size(0);
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidBatchSize(0)));
}

#[test]
fn test_invalid_learning_rate() {
    let config = LearnerConfig::default().with_learning_rate(0.0);
    assert_eq!(
        validate_config(&config),
        Err(ValidationError::InvalidLearningRate(0.0))
    );

    let config = LearnerConfig::default().with_learning_rate(f32::NAN);
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidLearningRate(_))
    ));
}

#[test]
fn test_invalid_momentum() {
    let config = LearnerConfig::default().with_momentum(1.0);
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidMomentum(1.0)));
}

#[test]
fn test_invalid_hidden_size() {
    let config = LearnerConfig::default().with_hidden_size(0);
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidHiddenSize(0)));
}

#[test]
fn test_invalid_grad_clip() {
    let config = LearnerConfig::default().with_grad_clip(-1.0);
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidGradClip(-1.0)));
}

#[test]
fn test_invalid_data_shape() {
    let mut config = LearnerConfig::default();
    config.data.classes = 1;
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidClasses(1)));

    let mut config = LearnerConfig::default();
    config.data.features = 0;
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidFeatures(0)));

    let mut config = LearnerConfig::default();
    config.data.spread = f32::INFINITY;
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::InvalidSpread(_))
    ));
}

#[test]
fn test_error_messages() {
    let err = ValidationError::InvalidBatchSize(0);
    assert!(err.to_string().contains("must be > 0"));
    let err = ValidationError::InvalidMomentum(1.5);
    assert!(err.to_string().contains("1.5"));
}
