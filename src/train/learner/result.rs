//! Fit result types

use serde::Serialize;

/// Outcome of a [`Learner::fit`](super::Learner::fit) call
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FitSummary {
    /// Epochs that reached `epoch_did_finish`
    pub epochs_completed: usize,
    /// Training batches that reached `batch_did_finish`
    pub iterations: usize,
    /// Loss of the last processed batch
    pub final_loss: f32,
    /// Whether a delegate stopped the run
    pub stopped_early: bool,
    /// Wall-clock duration in seconds
    pub elapsed_secs: f64,
}
