//! Mode switching and progress bookkeeping

use super::traits::{Delegate, DelegateAction, HookResult};
use crate::nn::{Mode, Model};
use crate::train::state::TrainingState;

/// Toggles training/inference mode and tracks epoch progress
///
/// - `training_will_start`: resets `pct_epochs` and `current_iter`
/// - `epoch_will_start`: `pct_epochs = current_epoch`, training mode
/// - `batch_did_finish` (training pass only): advances `pct_epochs` by
///   `1 / iter_count` and `current_iter` by one
/// - `validation_will_start`: inference mode
///
/// Register it first so later delegates observe the updated flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrainEvalDelegate;

impl TrainEvalDelegate {
    /// Create the delegate
    pub fn new() -> Self {
        Self
    }
}

impl<M: Model, L> Delegate<M, L> for TrainEvalDelegate {
    fn training_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        state.set_pct_epochs(0.0);
        state.set_current_iter(0);
        Ok(DelegateAction::Continue)
    }

    fn epoch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        state.set_pct_epochs(state.current_epoch() as f32);
        state.set_mode(Mode::Training);
        state.set_in_train(true);
        Ok(DelegateAction::Continue)
    }

    fn batch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        if state.in_train() {
            // an empty pass fires no batches; the guard keeps a zero count harmless
            if state.iter_count() > 0 {
                state.set_pct_epochs(state.pct_epochs() + 1.0 / state.iter_count() as f32);
            }
            state.set_current_iter(state.current_iter() + 1);
        }
        Ok(DelegateAction::Continue)
    }

    fn validation_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        state.set_mode(Mode::Inference);
        state.set_in_train(false);
        Ok(DelegateAction::Continue)
    }

    fn name(&self) -> &'static str {
        "TrainEvalDelegate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ClassIndices, LabelKind};
    use crate::nn::Mlp;
    use approx::assert_relative_eq;

    type State = TrainingState<Mlp, ClassIndices>;

    #[test]
    fn test_training_will_start_resets() {
        let mut delegate = TrainEvalDelegate::new();
        let mut state: State = TrainingState::new(LabelKind::ClassIndices);
        state.set_pct_epochs(3.5);
        state.set_current_iter(17);

        delegate.training_will_start(&mut state).unwrap();
        assert_eq!(state.pct_epochs(), 0.0);
        assert_eq!(state.current_iter(), 0);
    }

    #[test]
    fn test_epoch_and_validation_switch_mode() {
        let mut delegate = TrainEvalDelegate;
        let mut state: State = TrainingState::new(LabelKind::ClassIndices);
        state.set_current_epoch(2);

        delegate.epoch_will_start(&mut state).unwrap();
        assert!(state.in_train());
        assert_eq!(state.mode(), Mode::Training);
        assert_relative_eq!(state.pct_epochs(), 2.0);

        delegate.validation_will_start(&mut state).unwrap();
        assert!(!state.in_train());
        assert_eq!(state.mode(), Mode::Inference);
    }

    #[test]
    fn test_batch_did_finish_advances_only_in_train() {
        let mut delegate = TrainEvalDelegate;
        let mut state: State = TrainingState::new(LabelKind::ClassIndices);
        state.set_current_epoch(1);
        delegate.epoch_will_start(&mut state).unwrap();
        state.begin_pass(4);

        delegate.batch_did_finish(&mut state).unwrap();
        assert_relative_eq!(state.pct_epochs(), 1.25);
        assert_eq!(state.current_iter(), 1);

        delegate.validation_will_start(&mut state).unwrap();
        delegate.batch_did_finish(&mut state).unwrap();
        assert_relative_eq!(state.pct_epochs(), 1.25);
        assert_eq!(state.current_iter(), 1);
    }

    #[test]
    fn test_zero_iter_count_is_guarded() {
        let mut delegate = TrainEvalDelegate;
        let mut state: State = TrainingState::new(LabelKind::ClassIndices);
        delegate.epoch_will_start(&mut state).unwrap();
        state.begin_pass(0);

        delegate.batch_did_finish(&mut state).unwrap();
        assert!(state.pct_epochs().is_finite());
        assert_eq!(state.pct_epochs(), 0.0);
    }
}
