//! Mean Squared Error loss

use super::LossFn;
use crate::data::Probabilities;
use crate::error::{Error, Result};
use ndarray::Array2;

/// Mean Squared Error Loss
///
/// L = mean((output - target)^2) over every entry
#[derive(Clone, Copy, Debug, Default)]
pub struct MSELoss;

impl MSELoss {
    fn diff(output: &Array2<f32>, target: &Probabilities) -> Result<Array2<f32>> {
        if output.shape() != target.values().shape() {
            return Err(Error::shape("MSELoss", target.values().shape(), output.shape()));
        }
        Ok(output - target.values())
    }
}

impl LossFn<Array2<f32>, Probabilities> for MSELoss {
    fn forward(&self, output: &Array2<f32>, target: &Probabilities) -> Result<f32> {
        let diff = Self::diff(output, target)?;
        Ok(diff.mapv(|d| d * d).mean().unwrap_or(0.0))
    }

    fn gradient(&self, output: &Array2<f32>, target: &Probabilities) -> Result<Array2<f32>> {
        let diff = Self::diff(output, target)?;
        let count = diff.len().max(1) as f32;
        Ok(diff.mapv(|d| 2.0 * d / count))
    }

    fn name(&self) -> &str {
        "MSE"
    }
}
