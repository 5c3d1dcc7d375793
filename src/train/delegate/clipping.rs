//! Gradient norm clipping between backward and the optimizer

use super::traits::{Delegate, DelegateAction, HookResult};
use crate::nn::Model;
use crate::optim::{clip_grad_norm, ParameterSet};
use crate::train::state::TrainingState;
use tracing::debug;

/// Rescales each new gradient so its global L2 norm is at most `max_norm`
#[derive(Clone, Copy, Debug)]
pub struct GradientClipping {
    max_norm: f32,
}

impl GradientClipping {
    /// Create the delegate
    pub fn new(max_norm: f32) -> Self {
        Self { max_norm }
    }

    /// Norm ceiling
    pub fn max_norm(&self) -> f32 {
        self.max_norm
    }
}

impl<M, L> Delegate<M, L> for GradientClipping
where
    M: Model,
    M::Parameters: ParameterSet,
{
    fn learner_did_produce_new_gradient(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        if let Some(gradient) = state.gradient_mut() {
            let norm = clip_grad_norm(gradient, self.max_norm);
            if norm > self.max_norm {
                debug!(norm, max_norm = self.max_norm, "clipped gradient");
            }
        }
        Ok(DelegateAction::Continue)
    }

    fn name(&self) -> &'static str {
        "GradientClipping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ClassIndices, LabelKind};
    use crate::nn::Mlp;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn test_clipping_bounds_gradient_norm() {
        let mut state: TrainingState<Mlp, ClassIndices> =
            TrainingState::new(LabelKind::ClassIndices);
        let mut grad = Mlp::new(3, 4, 2, 7).parameters().clone();
        grad.scale(100.0);
        assert!(grad.norm() > 1.0);
        state.record_step(Array2::zeros((1, 2)), 0.0, grad);

        let mut clip = GradientClipping::new(1.0);
        clip.learner_did_produce_new_gradient(&mut state).unwrap();
        let clipped = state.current_gradient().unwrap().norm();
        assert_relative_eq!(clipped, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_clipping_without_gradient_is_noop() {
        let mut state: TrainingState<Mlp, ClassIndices> =
            TrainingState::new(LabelKind::ClassIndices);
        let mut clip = GradientClipping::new(0.5);
        assert_eq!(
            clip.learner_did_produce_new_gradient(&mut state).unwrap(),
            DelegateAction::Continue
        );
        assert!(state.current_gradient().is_none());
    }
}
