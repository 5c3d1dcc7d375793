//! Weighted running average of validation loss and metrics

use super::report::{EpochReport, LogReporter, Reporter};
use super::traits::{Delegate, DelegateAction, HookResult};
use crate::data::{LabelKind, Target};
use crate::nn::Model;
use crate::train::metrics::Metric;
use crate::train::state::TrainingState;
use tracing::warn;

/// Name of the loss slot in every report
pub const LOSS_SLOT: &str = "valid_loss";

/// Averages loss plus user metrics over each validation pass
///
/// Every batch contributes proportionally to its size, so a ragged final
/// batch is weighted correctly. Slot 0 of [`partials`](Self::partials) is the
/// loss; slot `i + 1` belongs to the `i`-th metric.
///
/// Metrics are only evaluated when the learner's labels are
/// [`LabelKind::ClassIndices`]. With [`LabelKind::Probabilities`] labels only
/// the loss slot accumulates and metric slots report `0.0`.
///
/// An epoch whose validation pass saw no samples reports nothing.
pub struct AvgMetric<M: Model, L> {
    metrics: Vec<Box<dyn Metric<M::Output, L>>>,
    reporter: Box<dyn Reporter>,
    partials: Vec<f32>,
    total: usize,
}

impl<M: Model, L: Target> AvgMetric<M, L> {
    /// Loss-only averaging, reported through `tracing`
    pub fn new() -> Self {
        Self {
            metrics: Vec::new(),
            reporter: Box::new(LogReporter),
            partials: vec![0.0],
            total: 0,
        }
    }

    /// Add a metric
    pub fn with_metric<T: Metric<M::Output, L> + 'static>(mut self, metric: T) -> Self {
        self.metrics.push(Box::new(metric));
        self.partials.push(0.0);
        self
    }

    /// Replace the report sink
    pub fn with_reporter<R: Reporter + 'static>(mut self, reporter: R) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Slot names: the loss followed by each metric
    pub fn names(&self) -> Vec<String> {
        std::iter::once(LOSS_SLOT.to_string())
            .chain(self.metrics.iter().map(|m| m.name().to_string()))
            .collect()
    }

    /// Running (or, after `epoch_did_finish`, averaged) sums
    pub fn partials(&self) -> &[f32] {
        &self.partials
    }

    /// Validation samples seen this epoch
    pub fn total(&self) -> usize {
        self.total
    }

    fn accumulate(&mut self, kind: LabelKind, loss: f32, output: &M::Output, target: &L) {
        let bs = target.batch_size();
        self.total += bs;
        let weight = bs as f32;
        self.partials[0] += weight * loss;

        match kind {
            LabelKind::ClassIndices => {
                for (slot, metric) in self.partials[1..].iter_mut().zip(&self.metrics) {
                    *slot += weight * metric.compute(output, target);
                }
            }
            LabelKind::Probabilities => {}
        }
    }
}

impl<M: Model, L: Target> Default for AvgMetric<M, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model, L: Target> Delegate<M, L> for AvgMetric<M, L> {
    fn epoch_will_start(&mut self, _state: &mut TrainingState<M, L>) -> HookResult {
        self.total = 0;
        self.partials = vec![0.0; self.metrics.len() + 1];
        Ok(DelegateAction::Continue)
    }

    fn batch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        if state.in_train() {
            return Ok(DelegateAction::Continue);
        }
        let (Some(output), Some(target)) = (state.current_output(), state.current_target()) else {
            return Ok(DelegateAction::Continue);
        };
        self.accumulate(state.label_kind(), state.current_loss(), output, target);
        Ok(DelegateAction::Continue)
    }

    fn epoch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        let epoch = state.current_epoch();
        if self.total == 0 {
            warn!(epoch, "no validation samples seen; skipping metric report");
            return Ok(DelegateAction::Continue);
        }

        let total = self.total as f32;
        for partial in &mut self.partials {
            *partial /= total;
        }

        let report = EpochReport {
            epoch,
            names: self.names(),
            values: self.partials.clone(),
        };
        self.reporter.report(&report)?;
        Ok(DelegateAction::Continue)
    }

    fn name(&self) -> &'static str {
        "AvgMetric"
    }
}
