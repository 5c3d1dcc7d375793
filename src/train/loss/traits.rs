//! Loss function trait

use crate::error::Result;

/// Trait for loss functions
///
/// A loss maps a model output and a label to a scalar and supplies the
/// derivative of that scalar with respect to the output, which the model's
/// backward pass turns into a parameter gradient.
pub trait LossFn<O, L> {
    /// Scalar loss for `output` against `target`
    fn forward(&self, output: &O, target: &L) -> Result<f32>;

    /// `dLoss/dOutput`, shaped like `output`
    fn gradient(&self, output: &O, target: &L) -> Result<O>;

    /// Name of the loss function
    fn name(&self) -> &str;
}
