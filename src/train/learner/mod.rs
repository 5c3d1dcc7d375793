//! The learner: owns a model and drives it through epochs
//!
//! - `core`: construction and accessors
//! - `fit`: the epoch loop and per-pass iteration
//! - `step`: one forward/backward/update cycle
//!
//! # Example
//!
//! ```no_run
//! use aprendiz::data::{blobs_data_bunch, BlobSpec, ClassIndices};
//! use aprendiz::nn::Mlp;
//! use aprendiz::optim::SGD;
//! use aprendiz::train::{Accuracy, AvgMetric, CrossEntropyLoss, Learner, TrainEvalDelegate};
//!
//! let data = blobs_data_bunch(&BlobSpec::default(), 64, 0).unwrap();
//! let mut learner = Learner::new(data, CrossEntropyLoss, SGD::new(0.1, 0.9), || {
//!     Mlp::new(8, 32, 4, 0)
//! })
//! .with_delegate(TrainEvalDelegate::new())
//! .with_delegate(AvgMetric::<Mlp, ClassIndices>::new().with_metric(Accuracy));
//!
//! let summary = learner.fit(5).unwrap();
//! println!("{} epochs, final loss {:.4}", summary.epochs_completed, summary.final_loss);
//! ```

mod core;
mod fit;
mod result;
mod step;


pub use self::core::Learner;
pub use result::FitSummary;
