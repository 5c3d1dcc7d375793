//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::LearnerConfig;
use crate::data::BlobSpec;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = LearnerConfig> {
    (
        0usize..100,                        // epochs
        1usize..256,                        // batch_size
        1e-6f32..1.0,                       // learning_rate
        0.0f32..0.99,                       // momentum
        proptest::option::of(0.1f32..10.0), // grad_clip
        2usize..10,                         // classes
    )
        .prop_map(|(epochs, batch_size, lr, momentum, grad_clip, classes)| LearnerConfig {
            epochs,
            batch_size,
            learning_rate: lr,
            momentum,
            grad_clip,
            data: BlobSpec {
                classes,
                ..Default::default()
            },
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_batch_size_fails(config in arb_valid_config()) {
        let config = config.with_batch_size(0);
        prop_assert_eq!(validate_config(&config), Err(ValidationError::InvalidBatchSize(0)));
    }

    #[test]
    fn prop_out_of_range_lr_fails(config in arb_valid_config(), lr in 1.01f32..100.0) {
        let config = config.with_learning_rate(lr);
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidLearningRate(_))
        ));
    }
}
