//! Mutable training snapshot shared with delegates
//!
//! The learner owns one [`TrainingState`] and hands it to every hook by
//! mutable reference. Loop-owned fields (epoch, batch, output, loss) can only
//! be written by the learner. Delegates may write the bookkeeping fields
//! (mode, `in_train`, progress counters) and rewrite the gradient; everything
//! else is read-only to them.

use crate::data::LabelKind;
use crate::nn::{Mode, Model};

/// The "current" view of a training run
pub struct TrainingState<M: Model, L> {
    epoch_count: usize,
    current_epoch: usize,
    in_train: bool,
    pct_epochs: f32,
    current_iter: usize,
    iter_count: usize,
    batch_index: usize,
    current_input: Option<M::Input>,
    current_target: Option<L>,
    current_output: Option<M::Output>,
    current_loss: f32,
    current_gradient: Option<M::Parameters>,
    mode: Mode,
    label_kind: LabelKind,
}

impl<M: Model, L> TrainingState<M, L> {
    /// Fresh state for a learner whose labels use `label_kind`
    pub fn new(label_kind: LabelKind) -> Self {
        Self {
            epoch_count: 0,
            current_epoch: 0,
            in_train: false,
            pct_epochs: 0.0,
            current_iter: 0,
            iter_count: 0,
            batch_index: 0,
            current_input: None,
            current_target: None,
            current_output: None,
            current_loss: 0.0,
            current_gradient: None,
            mode: Mode::Training,
            label_kind,
        }
    }

    /// Total epochs requested by the running `fit`
    pub fn epoch_count(&self) -> usize {
        self.epoch_count
    }

    /// Zero-based index of the current epoch
    pub fn current_epoch(&self) -> usize {
        self.current_epoch
    }

    /// True while iterating the training dataset
    pub fn in_train(&self) -> bool {
        self.in_train
    }

    /// Continuous epoch progress, e.g. `1.25` is a quarter into epoch 1
    pub fn pct_epochs(&self) -> f32 {
        self.pct_epochs
    }

    /// Training batches processed since `fit` started
    pub fn current_iter(&self) -> usize {
        self.current_iter
    }

    /// Batches in the dataset currently being iterated
    pub fn iter_count(&self) -> usize {
        self.iter_count
    }

    /// Zero-based position of the current batch within its pass
    pub fn batch_index(&self) -> usize {
        self.batch_index
    }

    /// Input of the current batch
    pub fn current_input(&self) -> Option<&M::Input> {
        self.current_input.as_ref()
    }

    /// Labels of the current batch
    pub fn current_target(&self) -> Option<&L> {
        self.current_target.as_ref()
    }

    /// Model output for the current batch
    pub fn current_output(&self) -> Option<&M::Output> {
        self.current_output.as_ref()
    }

    /// Loss of the most recent batch; `0.0` before the first one
    pub fn current_loss(&self) -> f32 {
        self.current_loss
    }

    /// Gradient of the most recent batch
    pub fn current_gradient(&self) -> Option<&M::Parameters> {
        self.current_gradient.as_ref()
    }

    /// Mode handed to the model's forward pass
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Label layout of the learner's datasets
    pub fn label_kind(&self) -> LabelKind {
        self.label_kind
    }

    /// Mark the training or validation pass
    pub fn set_in_train(&mut self, in_train: bool) {
        self.in_train = in_train;
    }

    /// Switch the forward-pass mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Overwrite epoch progress
    pub fn set_pct_epochs(&mut self, pct_epochs: f32) {
        self.pct_epochs = pct_epochs;
    }

    /// Overwrite the training iteration counter
    pub fn set_current_iter(&mut self, current_iter: usize) {
        self.current_iter = current_iter;
    }

    /// Rewrite the gradient before the optimizer consumes it
    pub fn gradient_mut(&mut self) -> Option<&mut M::Parameters> {
        self.current_gradient.as_mut()
    }

    pub(crate) fn begin_fit(&mut self, epoch_count: usize) {
        self.epoch_count = epoch_count;
        self.current_epoch = 0;
    }

    pub(crate) fn set_current_epoch(&mut self, epoch: usize) {
        self.current_epoch = epoch;
    }

    pub(crate) fn begin_pass(&mut self, iter_count: usize) {
        self.iter_count = iter_count;
        self.batch_index = 0;
    }

    pub(crate) fn set_batch(&mut self, index: usize, input: M::Input, target: L) {
        self.batch_index = index;
        self.current_input = Some(input);
        self.current_target = Some(target);
    }

    pub(crate) fn record_step(&mut self, output: M::Output, loss: f32, gradient: M::Parameters) {
        self.current_output = Some(output);
        self.current_loss = loss;
        self.current_gradient = Some(gradient);
    }
}
