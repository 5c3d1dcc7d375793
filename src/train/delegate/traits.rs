//! Core traits and types for the delegate system
//!
//! - `Hook` - the named points in the training loop
//! - `DelegateAction` - what a delegate asks the loop to do next
//! - `Delegate` - the trait all delegates implement

use crate::error::Result;
use crate::nn::Model;
use crate::train::state::TrainingState;

/// Action requested by a delegate after a hook
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DelegateAction {
    /// Carry on with the loop
    Continue,
    /// Abandon the rest of the current batch
    SkipBatch,
    /// Abandon the rest of the current pass over a dataset
    SkipEpoch,
    /// Leave `fit` immediately
    Stop,
}

/// Result of a hook call; `Err` is fatal to the run
pub type HookResult = Result<DelegateAction>;

/// Named hook points, in the order they appear inside one epoch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Once, before epoch 0
    TrainingWillStart,
    /// Start of every epoch
    EpochWillStart,
    /// Before each batch's compute
    BatchWillStart,
    /// After the gradient is computed, before the optimizer update
    LearnerDidProduceNewGradient,
    /// After the optimizer update
    OptimizerDidUpdate,
    /// After each batch's compute
    BatchDidFinish,
    /// Between the training and validation passes
    ValidationWillStart,
    /// End of every epoch, after validation
    EpochDidFinish,
    /// Once, after the last epoch
    TrainingDidFinish,
}

impl Hook {
    /// Every hook, in loop order
    pub const ALL: [Hook; 9] = [
        Hook::TrainingWillStart,
        Hook::EpochWillStart,
        Hook::BatchWillStart,
        Hook::LearnerDidProduceNewGradient,
        Hook::OptimizerDidUpdate,
        Hook::BatchDidFinish,
        Hook::ValidationWillStart,
        Hook::EpochDidFinish,
        Hook::TrainingDidFinish,
    ];

    /// Hook name as used in logs
    pub fn name(self) -> &'static str {
        match self {
            Hook::TrainingWillStart => "training_will_start",
            Hook::EpochWillStart => "epoch_will_start",
            Hook::BatchWillStart => "batch_will_start",
            Hook::LearnerDidProduceNewGradient => "learner_did_produce_new_gradient",
            Hook::OptimizerDidUpdate => "optimizer_did_update",
            Hook::BatchDidFinish => "batch_did_finish",
            Hook::ValidationWillStart => "validation_will_start",
            Hook::EpochDidFinish => "epoch_did_finish",
            Hook::TrainingDidFinish => "training_did_finish",
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for training delegates
///
/// Implement this trait to hook into training events. All methods have
/// default no-op implementations returning [`DelegateAction::Continue`], so
/// you only need to implement the events you care about.
///
/// Each hook receives the learner's [`TrainingState`] by mutable reference
/// for the duration of the call only.
pub trait Delegate<M: Model, L> {
    /// Called once before the first epoch
    fn training_will_start(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called once after the last epoch, unless training was stopped
    fn training_did_finish(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called at the start of each epoch
    fn epoch_will_start(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called at the end of each epoch, after validation
    fn epoch_did_finish(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called between the training and the validation pass
    fn validation_will_start(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called before each batch is computed
    fn batch_will_start(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called after each batch, unless the batch was skipped
    fn batch_did_finish(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called when a new gradient is available, before the optimizer sees it
    fn learner_did_produce_new_gradient(
        &mut self,
        _state: &mut TrainingState<M, L>,
    ) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Called after the optimizer applied an update
    fn optimizer_did_update(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        Ok(DelegateAction::Continue)
    }

    /// Delegate name for logging
    fn name(&self) -> &'static str {
        "Delegate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ClassIndices, LabelKind};
    use crate::nn::Mlp;

    #[test]
    fn test_default_delegate_impl() {
        struct Minimal;
        impl Delegate<Mlp, ClassIndices> for Minimal {
            fn name(&self) -> &'static str {
                "Minimal"
            }
        }

        let mut delegate = Minimal;
        let mut state = TrainingState::new(LabelKind::ClassIndices);
        assert_eq!(delegate.training_will_start(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.epoch_will_start(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.batch_will_start(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(
            delegate.learner_did_produce_new_gradient(&mut state).unwrap(),
            DelegateAction::Continue
        );
        assert_eq!(delegate.optimizer_did_update(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.batch_did_finish(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.validation_will_start(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.epoch_did_finish(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.training_did_finish(&mut state).unwrap(), DelegateAction::Continue);
        assert_eq!(delegate.name(), "Minimal");
    }

    #[test]
    fn test_hook_names_unique() {
        let mut names: Vec<&str> = Hook::ALL.iter().map(|h| h.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Hook::ALL.len());
        assert_eq!(Hook::BatchDidFinish.to_string(), "batch_did_finish");
    }

    #[test]
    fn test_action_copy_eq() {
        let action = DelegateAction::SkipBatch;
        let copied = action;
        assert_eq!(action, copied);
        assert_ne!(DelegateAction::Stop, DelegateAction::SkipEpoch);
    }
}
