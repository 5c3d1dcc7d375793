//! Optimizer and parameter-set traits

use crate::error::{Error, Result};
use ndarray::{Array, Dimension};

/// Arithmetic an optimizer needs from a model's parameter set
///
/// Gradients share the parameter set's type: a gradient is the same
/// structure filled with partial derivatives.
pub trait ParameterSet: Clone {
    /// A structure of the same shape filled with zeros
    fn zeros_like(&self) -> Self;

    /// `self += alpha * rhs`; shapes must match
    fn add_scaled(&mut self, alpha: f32, rhs: &Self) -> Result<()>;

    /// `self *= factor`
    fn scale(&mut self, factor: f32);

    /// Sum of squared entries
    fn squared_norm(&self) -> f32;

    /// L2 norm over every entry
    fn norm(&self) -> f32 {
        self.squared_norm().sqrt()
    }
}

impl<D: Dimension> ParameterSet for Array<f32, D> {
    fn zeros_like(&self) -> Self {
        Array::zeros(self.raw_dim())
    }

    fn add_scaled(&mut self, alpha: f32, rhs: &Self) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(Error::shape("ParameterSet::add_scaled", self.shape(), rhs.shape()));
        }
        self.scaled_add(alpha, rhs);
        Ok(())
    }

    fn scale(&mut self, factor: f32) {
        self.mapv_inplace(|v| v * factor);
    }

    fn squared_norm(&self) -> f32 {
        self.iter().map(|&v| v * v).sum()
    }
}

/// Trait for optimization algorithms
///
/// An optimizer consumes a gradient and mutates the parameter set in place.
pub trait Optimizer<P> {
    /// Apply one update along `gradient`
    fn update(&mut self, parameters: &mut P, gradient: &P) -> Result<()>;

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}
