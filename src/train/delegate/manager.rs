//! Ordered dispatch of hooks to registered delegates

use super::traits::{Delegate, DelegateAction, Hook};
use crate::error::Result;
use crate::nn::Model;
use crate::train::state::TrainingState;
use tracing::debug;

/// Manages registered delegates and dispatches hooks to them
///
/// Delegates run in registration order. Dispatch stops at the first delegate
/// that returns anything other than [`DelegateAction::Continue`] or fails;
/// delegates after it do not see that firing.
pub struct Delegates<M: Model, L> {
    delegates: Vec<Box<dyn Delegate<M, L>>>,
}

impl<M: Model, L> Delegates<M, L> {
    /// Create an empty delegate list
    pub fn new() -> Self {
        Self {
            delegates: Vec::new(),
        }
    }

    /// Append a delegate
    pub fn add<D: Delegate<M, L> + 'static>(&mut self, delegate: D) {
        self.delegates.push(Box::new(delegate));
    }

    /// Append an already boxed delegate
    pub fn add_boxed(&mut self, delegate: Box<dyn Delegate<M, L>>) {
        self.delegates.push(delegate);
    }

    /// Check if no delegates are registered
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    /// Get number of delegates
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Names of the registered delegates, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.delegates.iter().map(|d| d.name()).collect()
    }

    /// Fire `hook` on every delegate until one interrupts
    pub fn fire(&mut self, hook: Hook, state: &mut TrainingState<M, L>) -> Result<DelegateAction> {
        for delegate in &mut self.delegates {
            let action = match hook {
                Hook::TrainingWillStart => delegate.training_will_start(state),
                Hook::TrainingDidFinish => delegate.training_did_finish(state),
                Hook::EpochWillStart => delegate.epoch_will_start(state),
                Hook::EpochDidFinish => delegate.epoch_did_finish(state),
                Hook::ValidationWillStart => delegate.validation_will_start(state),
                Hook::BatchWillStart => delegate.batch_will_start(state),
                Hook::BatchDidFinish => delegate.batch_did_finish(state),
                Hook::LearnerDidProduceNewGradient => {
                    delegate.learner_did_produce_new_gradient(state)
                }
                Hook::OptimizerDidUpdate => delegate.optimizer_did_update(state),
            }?;

            if action != DelegateAction::Continue {
                debug!(
                    hook = hook.name(),
                    delegate = delegate.name(),
                    ?action,
                    "delegate interrupted dispatch"
                );
                return Ok(action);
            }
        }
        Ok(DelegateAction::Continue)
    }
}

impl<M: Model, L> Default for Delegates<M, L> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::data::{ClassIndices, LabelKind};
    use crate::nn::Mlp;
    use crate::train::testing::{EventLog, Recorder, Scripted};
    use proptest::prelude::*;

    proptest! {
        /// Every delegate before the interrupting one sees the hook, none after it
        #[test]
        fn dispatch_prefix_until_interrupt(
            before in 0usize..5,
            after in 0usize..5,
            action in prop_oneof![
                Just(DelegateAction::SkipBatch),
                Just(DelegateAction::SkipEpoch),
                Just(DelegateAction::Stop),
            ],
        ) {
            let log = EventLog::default();
            let mut delegates: Delegates<Mlp, ClassIndices> = Delegates::new();
            for _ in 0..before {
                delegates.add(Recorder::new("pre", log.clone()));
            }
            delegates.add(Scripted::always(Hook::BatchDidFinish, action));
            for _ in 0..after {
                delegates.add(Recorder::new("post", log.clone()));
            }

            let mut state = TrainingState::new(LabelKind::ClassIndices);
            let got = delegates.fire(Hook::BatchDidFinish, &mut state).unwrap();

            prop_assert_eq!(got, action);
            prop_assert_eq!(log.count("pre:batch_did_finish"), before);
            prop_assert_eq!(log.count("post:batch_did_finish"), 0);
        }

        /// Without interrupts every delegate sees every firing
        #[test]
        fn dispatch_fans_out(num_delegates in 1usize..6, firings in 1usize..4) {
            let log = EventLog::default();
            let mut delegates: Delegates<Mlp, ClassIndices> = Delegates::new();
            for _ in 0..num_delegates {
                delegates.add(Recorder::new("d", log.clone()));
            }

            let mut state = TrainingState::new(LabelKind::ClassIndices);
            for _ in 0..firings {
                delegates.fire(Hook::TrainingWillStart, &mut state).unwrap();
            }
            prop_assert_eq!(log.count("d:training_will_start"), num_delegates * firings);
        }
    }
}
