//! Configuration validation
//!
//! Validates learner configurations for correctness before training.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
