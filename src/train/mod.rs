//! High-level training loop
//!
//! This module provides the training engine:
//! - [`Learner`]: owns model, optimizer, loss and data; runs `fit`
//! - [`TrainingState`]: the snapshot delegates read and adjust
//! - [`Delegate`]: lifecycle hooks with [`DelegateAction`] control flow
//! - Built-in delegates ([`TrainEvalDelegate`], [`AvgMetric`],
//!   [`ProgressDelegate`], [`GradientClipping`]) and report sinks
//! - Loss functions and evaluation metrics
//!
//! # Example
//!
//! ```no_run
//! use aprendiz::data::{blobs_data_bunch, BlobSpec, ClassIndices};
//! use aprendiz::nn::Mlp;
//! use aprendiz::optim::SGD;
//! use aprendiz::train::{
//!     Accuracy, AvgMetric, CrossEntropyLoss, Learner, MetricsHistory, TrainEvalDelegate,
//! };
//!
//! let data = blobs_data_bunch(&BlobSpec::default(), 64, 42).unwrap();
//! let history = MetricsHistory::new();
//!
//! let mut learner = Learner::new(data, CrossEntropyLoss, SGD::new(0.05, 0.9), || {
//!     Mlp::new(8, 32, 4, 42)
//! })
//! .with_delegate(TrainEvalDelegate::new())
//! .with_delegate(
//!     AvgMetric::<Mlp, ClassIndices>::new()
//!         .with_metric(Accuracy)
//!         .with_reporter(history.clone()),
//! );
//!
//! learner.fit(10).unwrap();
//! for report in history.reports() {
//!     println!("epoch {}: {:?}", report.epoch, report.values);
//! }
//! ```

pub mod delegate;
mod learner;
mod loss;
mod metrics;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use delegate::{
    AvgMetric, Delegate, DelegateAction, Delegates, EpochReport, GradientClipping, Hook,
    HookResult, JsonLinesReporter, LogReporter, MetricsHistory, ProgressDelegate, Reporter,
    StdoutReporter, TrainEvalDelegate,
};
pub use learner::{FitSummary, Learner};
pub use loss::{CrossEntropyLoss, LossFn, MSELoss};
pub use metrics::{Accuracy, ErrorRate, Metric};
pub use state::TrainingState;
