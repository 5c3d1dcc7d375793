//! Stochastic Gradient Descent optimizer

use super::optimizer::{Optimizer, ParameterSet};
use crate::error::Result;

/// SGD optimizer with optional momentum
#[derive(Clone, Debug)]
pub struct SGD<P> {
    lr: f32,
    momentum: f32,
    velocity: Option<P>,
}

impl<P> SGD<P> {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self {
            lr,
            momentum,
            velocity: None,
        }
    }

    /// Momentum coefficient
    pub fn momentum(&self) -> f32 {
        self.momentum
    }
}

impl<P: ParameterSet> Optimizer<P> for SGD<P> {
    fn update(&mut self, parameters: &mut P, gradient: &P) -> Result<()> {
        if self.momentum > 0.0 {
            // v = momentum * v - lr * grad; param += v
            let velocity = self.velocity.get_or_insert_with(|| gradient.zeros_like());
            velocity.scale(self.momentum);
            velocity.add_scaled(-self.lr, gradient)?;
            parameters.add_scaled(1.0, velocity)
        } else {
            parameters.add_scaled(-self.lr, gradient)
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
