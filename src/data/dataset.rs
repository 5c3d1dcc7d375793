//! Restartable batch sources
//!
//! A [`Dataset`] hands out a fresh lazy iterator every time [`Dataset::batches`]
//! is called, so the learner can traverse the same handle once per epoch.

use super::batch::Batch;
use super::target::{Rows, Target};
use crate::error::{Error, Result};

/// A finite, restartable sequence of batches
pub trait Dataset {
    /// Model input type carried by each batch
    type Input;
    /// Label type carried by each batch
    type Label: Target;
    /// Iterator returned by [`Dataset::batches`]
    type Iter<'a>: Iterator<Item = Batch<Self::Input, Self::Label>>
    where
        Self: 'a;

    /// Start a new traversal from the first batch
    fn batches(&self) -> Self::Iter<'_>;

    /// Number of batches in one traversal
    ///
    /// The default walks the whole sequence, which materializes every batch.
    /// Implementations that know their length should override it.
    fn count(&self) -> usize {
        self.batches().count()
    }
}

/// Dataset backed by row-stacked inputs and labels held in memory
///
/// Freshly built datasets yield one row per batch; call
/// [`InMemoryDataset::batched`] to group rows into fixed-size batches. The
/// final batch holds the remainder when the row count is not a multiple of
/// the batch size.
#[derive(Clone, Debug)]
pub struct InMemoryDataset<I, L> {
    inputs: I,
    labels: L,
    batch_size: usize,
}

impl<I: Rows, L: Target> InMemoryDataset<I, L> {
    /// Pair inputs with labels; both must have the same number of rows
    pub fn new(inputs: I, labels: L) -> Result<Self> {
        if inputs.rows() != labels.rows() {
            return Err(Error::Dataset(format!(
                "inputs have {} rows but labels have {}",
                inputs.rows(),
                labels.rows()
            )));
        }
        Ok(Self {
            inputs,
            labels,
            batch_size: 1,
        })
    }

    /// Regroup rows into batches of `batch_size`
    pub fn batched(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidBatchSize(batch_size));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Replace the labels with a converted representation
    pub fn map_labels<T, F>(self, f: F) -> Result<InMemoryDataset<I, T>>
    where
        T: Target,
        F: FnOnce(L) -> Result<T>,
    {
        let batch_size = self.batch_size;
        InMemoryDataset::new(self.inputs, f(self.labels)?).map(|ds| InMemoryDataset {
            batch_size,
            ..ds
        })
    }

    /// Rows per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.labels.rows()
    }

    /// True when the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator over the batches of an [`InMemoryDataset`]
pub struct InMemoryBatches<'a, I, L> {
    dataset: &'a InMemoryDataset<I, L>,
    offset: usize,
}

impl<I: Rows, L: Target> Iterator for InMemoryBatches<'_, I, L> {
    type Item = Batch<I, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.dataset.len();
        if self.offset >= total {
            return None;
        }
        let end = (self.offset + self.dataset.batch_size).min(total);
        let range = self.offset..end;
        self.offset = end;
        Some(Batch::new(
            self.dataset.inputs.select_rows(range.clone()),
            self.dataset.labels.select_rows(range),
        ))
    }
}

impl<I: Rows, L: Target> Dataset for InMemoryDataset<I, L> {
    type Input = I;
    type Label = L;
    type Iter<'a>
        = InMemoryBatches<'a, I, L>
    where
        Self: 'a;

    fn batches(&self) -> Self::Iter<'_> {
        InMemoryBatches {
            dataset: self,
            offset: 0,
        }
    }

    fn count(&self) -> usize {
        self.len().div_ceil(self.batch_size)
    }
}
