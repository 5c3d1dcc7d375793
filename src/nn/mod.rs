//! Model abstraction and a small reference network
//!
//! The learner never differentiates anything itself. A [`Model`] supplies
//! both its forward pass and the vector-Jacobian product that turns
//! `dLoss/dOutput` into a gradient over its parameters.

mod mlp;

pub use mlp::{relu, Dense, Mlp, MlpParameters};

use crate::error::Result;

/// Training vs. inference behaviour flag handed to every forward pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Regularizers (dropout, noise) active
    #[default]
    Training,
    /// Deterministic evaluation
    Inference,
}

/// A differentiable function from an input batch to an output batch
pub trait Model {
    /// Input batch type
    type Input;
    /// Output batch type; also the type of `dLoss/dOutput`
    type Output;
    /// Parameter set; gradients share this type
    type Parameters;

    /// Compute the output for `input` under `mode`
    fn forward(&self, input: &Self::Input, mode: Mode) -> Result<Self::Output>;

    /// Gradient of the loss with respect to the parameters, given
    /// `output_grad = dLoss/dOutput` for the same `input`
    fn backward(
        &self,
        input: &Self::Input,
        output_grad: &Self::Output,
        mode: Mode,
    ) -> Result<Self::Parameters>;

    /// Borrow the parameter set
    fn parameters(&self) -> &Self::Parameters;

    /// Mutable handle used by the optimizer
    fn parameters_mut(&mut self) -> &mut Self::Parameters;
}
