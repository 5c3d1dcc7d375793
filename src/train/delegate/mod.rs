//! Delegates observing and steering the training loop
//!
//! A delegate implements any subset of the [`Delegate`] hooks. The learner
//! fires each hook through [`Delegates`], and the first non-`Continue`
//! [`DelegateAction`] decides what the loop does next.

mod avg_metric;
mod clipping;
mod manager;
mod progress;
mod report;
mod train_eval;
mod traits;

pub use avg_metric::{AvgMetric, LOSS_SLOT};
pub use clipping::GradientClipping;
pub use manager::Delegates;
pub use progress::ProgressDelegate;
pub use report::{EpochReport, JsonLinesReporter, LogReporter, MetricsHistory, Reporter, StdoutReporter};
pub use train_eval::TrainEvalDelegate;
pub use traits::{Delegate, DelegateAction, Hook, HookResult};
