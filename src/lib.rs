//! Aprendiz: a delegate-driven training loop
//!
//! A [`train::Learner`] owns a model, an optimizer, a loss function and a
//! train/valid [`data::DataBunch`]. `fit` walks epochs and batches and fires
//! a fixed set of hooks on every registered [`train::Delegate`]. Delegates
//! read and adjust the shared [`train::TrainingState`] and steer the loop by
//! returning a [`train::DelegateAction`]: continue, skip the batch, skip the
//! rest of the pass, or stop.
//!
//! # Modules
//!
//! - [`data`]: batches, restartable datasets, label layouts, synthetic blobs
//! - [`nn`]: the [`nn::Model`] contract and a two-layer [`nn::Mlp`]
//! - [`optim`]: [`optim::Optimizer`], [`optim::SGD`], gradient clipping
//! - [`train`]: learner, delegates, losses, metrics, reporters
//! - [`config`]: YAML configuration and validation
//! - [`cli`]: the `aprendiz` command-line front end

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod nn;
pub mod optim;
pub mod train;

pub use error::{Error, Result};
