//! Declarative learner configuration
//!
//! A [`LearnerConfig`] is read from YAML, validated with
//! [`validate_config`], and then turned into a learner by the CLI.

mod load;
mod schema;
mod validate;

pub use load::load_config;
pub use schema::LearnerConfig;
pub use validate::{validate_config, ValidationError};
