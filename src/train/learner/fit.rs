//! Epoch loop and per-dataset passes

use super::core::Learner;
use super::result::FitSummary;
use crate::data::{Dataset, Split};
use crate::error::Result;
use crate::nn::Model;
use crate::optim::Optimizer;
use crate::train::delegate::{DelegateAction, Hook};
use std::time::Instant;
use tracing::{debug, info};

/// Whether the loop may go on after a pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PassOutcome {
    /// Pass ran to the end or was skipped by a delegate
    Finished,
    /// A delegate asked to stop training
    Stopped,
}

impl<M, O, D> Learner<M, O, D>
where
    M: Model,
    O: Optimizer<M::Parameters>,
    D: Dataset<Input = M::Input>,
{
    /// Train for `epoch_count` epochs
    ///
    /// Each epoch runs one pass over the training dataset and one over the
    /// validation dataset. Delegates steer the loop through the action they
    /// return from each hook:
    ///
    /// - `SkipBatch` drops the rest of the current batch (no `batch_did_finish`)
    /// - `SkipEpoch` drops the rest of the current pass; `epoch_did_finish`
    ///   still fires
    /// - `Stop` returns at once with `stopped_early` set; `training_did_finish`
    ///   does not fire
    ///
    /// Delegates are called in registration order and a hook stops at the
    /// first one that returns anything but `Continue`, so delegates registered
    /// after it miss that firing. Register [`TrainEvalDelegate`] first; placed
    /// after a delegate that skips `epoch_will_start`, it leaves `pct_epochs`
    /// at the previous epoch's value.
    ///
    /// Actions outside their scope are ignored. Errors from the model, loss,
    /// optimizer or a delegate abort the run and are returned.
    ///
    /// [`TrainEvalDelegate`]: crate::train::TrainEvalDelegate
    pub fn fit(&mut self, epoch_count: usize) -> Result<FitSummary> {
        let start = Instant::now();
        self.epochs_completed = 0;
        self.iterations = 0;
        self.state.begin_fit(epoch_count);

        info!(
            epochs = epoch_count,
            delegates = self.delegates.len(),
            loss = self.loss_fn.name(),
            "starting fit"
        );

        if self.delegates.fire(Hook::TrainingWillStart, &mut self.state)? == DelegateAction::Stop {
            return Ok(self.summary(start, true));
        }

        for epoch in 0..epoch_count {
            self.state.set_current_epoch(epoch);
            if self.run_epoch()? == PassOutcome::Stopped {
                return Ok(self.summary(start, true));
            }

            let action = self.delegates.fire(Hook::EpochDidFinish, &mut self.state)?;
            self.epochs_completed += 1;
            if action == DelegateAction::Stop {
                return Ok(self.summary(start, true));
            }
        }

        if self.delegates.fire(Hook::TrainingDidFinish, &mut self.state)? == DelegateAction::Stop {
            return Ok(self.summary(start, true));
        }
        Ok(self.summary(start, false))
    }

    /// One epoch up to (not including) `epoch_did_finish`
    fn run_epoch(&mut self) -> Result<PassOutcome> {
        let run_training = match self.delegates.fire(Hook::EpochWillStart, &mut self.state)? {
            DelegateAction::Stop => return Ok(PassOutcome::Stopped),
            DelegateAction::SkipEpoch => false,
            DelegateAction::Continue | DelegateAction::SkipBatch => true,
        };
        if run_training && self.run_pass(Split::Train)? == PassOutcome::Stopped {
            return Ok(PassOutcome::Stopped);
        }

        let run_validation = match self.delegates.fire(Hook::ValidationWillStart, &mut self.state)? {
            DelegateAction::Stop => return Ok(PassOutcome::Stopped),
            DelegateAction::SkipEpoch => false,
            DelegateAction::Continue | DelegateAction::SkipBatch => true,
        };
        if run_validation {
            return self.run_pass(Split::Valid);
        }
        Ok(PassOutcome::Finished)
    }

    /// Iterate one dataset, running the batch step on every batch
    pub(super) fn run_pass(&mut self, split: Split) -> Result<PassOutcome> {
        let dataset = self.data.split(split);
        let iter_count = dataset.count();
        self.state.begin_pass(iter_count);
        debug!(epoch = self.state.current_epoch(), %split, batches = iter_count, "starting pass");

        let apply_update = split == Split::Train || !self.freeze_during_validation;

        for (index, batch) in dataset.batches().enumerate() {
            let (input, target) = batch.into_parts();
            self.state.set_batch(index, input, target);

            let action = match self.delegates.fire(Hook::BatchWillStart, &mut self.state)? {
                DelegateAction::Continue => Self::train_on_batch(
                    &mut self.model,
                    &mut self.optimizer,
                    self.loss_fn.as_ref(),
                    &mut self.delegates,
                    &mut self.state,
                    apply_update,
                )?,
                interrupted => interrupted,
            };

            match action {
                DelegateAction::Continue => {}
                DelegateAction::SkipBatch => {
                    debug!(%split, batch = index, "batch skipped");
                    continue;
                }
                DelegateAction::SkipEpoch => {
                    debug!(%split, batch = index, "rest of pass skipped");
                    return Ok(PassOutcome::Finished);
                }
                DelegateAction::Stop => return Ok(PassOutcome::Stopped),
            }

            let action = self.delegates.fire(Hook::BatchDidFinish, &mut self.state)?;
            if split == Split::Train {
                self.iterations += 1;
            }
            match action {
                DelegateAction::Stop => return Ok(PassOutcome::Stopped),
                DelegateAction::SkipEpoch => {
                    debug!(%split, batch = index, "rest of pass skipped");
                    return Ok(PassOutcome::Finished);
                }
                DelegateAction::Continue | DelegateAction::SkipBatch => {}
            }
        }

        Ok(PassOutcome::Finished)
    }

    fn summary(&self, start: Instant, stopped_early: bool) -> FitSummary {
        let summary = FitSummary {
            epochs_completed: self.epochs_completed,
            iterations: self.iterations,
            final_loss: self.state.current_loss(),
            stopped_early,
            elapsed_secs: start.elapsed().as_secs_f64(),
        };
        info!(
            epochs = summary.epochs_completed,
            iterations = summary.iterations,
            final_loss = summary.final_loss,
            stopped_early,
            "fit finished"
        );
        summary
    }
}
