//! Progress delegate for logging training progress

use super::traits::{Delegate, DelegateAction, HookResult};
use crate::nn::Model;
use crate::train::state::TrainingState;
use std::time::Instant;
use tracing::info;

/// Logs epoch boundaries and every `log_interval` training batches
#[derive(Clone, Debug)]
pub struct ProgressDelegate {
    /// Log every N training batches
    log_interval: usize,
    epoch_start: Option<Instant>,
}

impl ProgressDelegate {
    /// Create progress delegate; an interval of 0 disables per-batch lines
    pub fn new(log_interval: usize) -> Self {
        Self {
            log_interval,
            epoch_start: None,
        }
    }

    /// Batches between log lines
    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}

impl Default for ProgressDelegate {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<M: Model, L> Delegate<M, L> for ProgressDelegate {
    fn epoch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.epoch_start = Some(Instant::now());
        info!(
            "Epoch {}/{} starting",
            state.current_epoch() + 1,
            state.epoch_count()
        );
        Ok(DelegateAction::Continue)
    }

    fn batch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        let step = state.batch_index() + 1;
        if state.in_train() && self.log_interval > 0 && step % self.log_interval == 0 {
            info!(
                "  Step {}/{}: loss: {:.4}",
                step,
                state.iter_count(),
                state.current_loss()
            );
        }
        Ok(DelegateAction::Continue)
    }

    fn epoch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        let elapsed = self
            .epoch_start
            .take()
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or_default();
        info!(
            "Epoch {}/{}: loss: {:.4} ({:.1}s)",
            state.current_epoch() + 1,
            state.epoch_count(),
            state.current_loss(),
            elapsed
        );
        Ok(DelegateAction::Continue)
    }

    fn name(&self) -> &'static str {
        "ProgressDelegate"
    }
}
