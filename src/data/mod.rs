//! Dataset surface consumed by the learner
//!
//! - [`Dataset`]: restartable, countable batch source
//! - [`InMemoryDataset`]: row-stacked tensors chunked into batches
//! - [`DataBunch`]: the train/valid pair
//! - [`Target`] / [`LabelKind`]: label layouts (class indices vs dense rows)

mod batch;
mod bunch;
mod dataset;
pub mod synthetic;
mod target;

pub use batch::Batch;
pub use bunch::{DataBunch, Split};
pub use dataset::{Dataset, InMemoryBatches, InMemoryDataset};
pub use synthetic::{blobs_data_bunch, gaussian_blobs, BlobSpec};
pub use target::{ClassIndices, LabelKind, Probabilities, Rows, Target};
