//! Batch data structure

use super::target::Target;

/// A batch containing inputs and their labels
#[derive(Clone, Debug, PartialEq)]
pub struct Batch<I, L> {
    /// Input features
    pub inputs: I,
    /// Target labels
    pub targets: L,
}

impl<I, L> Batch<I, L> {
    /// Create a new batch
    pub fn new(inputs: I, targets: L) -> Self {
        Self { inputs, targets }
    }

    /// Split into `(inputs, targets)`
    pub fn into_parts(self) -> (I, L) {
        (self.inputs, self.targets)
    }
}

impl<I, L: Target> Batch<I, L> {
    /// Number of samples, taken from the labels
    pub fn size(&self) -> usize {
        self.targets.batch_size()
    }
}
