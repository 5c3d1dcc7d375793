//! Loss functions for training
//!
//! - [`CrossEntropyLoss`] - softmax cross-entropy over logits, for class
//!   indices or dense target rows
//! - [`MSELoss`] - Mean Squared Error against dense targets

mod cross_entropy;
mod mse;
mod traits;

pub use cross_entropy::CrossEntropyLoss;
pub use mse::MSELoss;
pub use traits::LossFn;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ClassIndices, Probabilities};
    use ndarray::Array2;

    #[test]
    fn test_loss_names() {
        assert_eq!(
            LossFn::<Array2<f32>, ClassIndices>::name(&CrossEntropyLoss),
            "CrossEntropy"
        );
        assert_eq!(LossFn::<Array2<f32>, Probabilities>::name(&MSELoss), "MSE");
    }
}
