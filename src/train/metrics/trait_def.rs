//! Core Metric trait definition

/// Trait for evaluation metrics over a model output and its labels
pub trait Metric<O, L> {
    /// Compute the metric for one batch
    fn compute(&self, output: &O, target: &L) -> f32;

    /// Name of the metric
    fn name(&self) -> &str;
}
