//! Optimizers and parameter arithmetic
//!
//! The learner only sequences calls into these; the update rule itself is a
//! pluggable collaborator behind [`Optimizer`].

mod clip;
mod optimizer;
mod sgd;

pub use clip::clip_grad_norm;
pub use optimizer::{Optimizer, ParameterSet};
pub use sgd::SGD;
