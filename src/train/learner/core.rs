//! Core Learner struct and basic methods

use crate::data::{DataBunch, Dataset, Target};
use crate::nn::Model;
use crate::optim::Optimizer;
use crate::train::delegate::{Delegate, Delegates};
use crate::train::loss::LossFn;
use crate::train::state::TrainingState;

/// Drives a model through training and validation passes, notifying
/// delegates at every step
///
/// The label layout is taken from the dataset's label type when the learner
/// is built and stays fixed for its lifetime.
pub struct Learner<M: Model, O, D: Dataset> {
    /// Training and validation datasets
    pub(crate) data: DataBunch<D>,

    /// Loss function
    pub(crate) loss_fn: Box<dyn LossFn<M::Output, D::Label>>,

    /// Optimizer
    pub(crate) optimizer: O,

    /// Model being trained
    pub(crate) model: M,

    /// Registered delegates
    pub(crate) delegates: Delegates<M, D::Label>,

    /// Snapshot shared with delegates
    pub(crate) state: TrainingState<M, D::Label>,

    /// Skip optimizer updates during the validation pass
    pub(crate) freeze_during_validation: bool,

    /// Epochs that reached `epoch_did_finish` in the current run
    pub(crate) epochs_completed: usize,

    /// Training batches that reached `batch_did_finish` in the current run
    pub(crate) iterations: usize,
}

impl<M, O, D> Learner<M, O, D>
where
    M: Model,
    O: Optimizer<M::Parameters>,
    D: Dataset<Input = M::Input>,
{
    /// Create a learner; `model_initializer` builds the model once
    pub fn new<F, I>(data: DataBunch<D>, loss_fn: F, optimizer: O, model_initializer: I) -> Self
    where
        F: LossFn<M::Output, D::Label> + 'static,
        I: FnOnce() -> M,
    {
        Self {
            data,
            loss_fn: Box::new(loss_fn),
            optimizer,
            model: model_initializer(),
            delegates: Delegates::new(),
            state: TrainingState::new(<D::Label as Target>::KIND),
            freeze_during_validation: false,
            epochs_completed: 0,
            iterations: 0,
        }
    }

    /// Register a delegate after the ones already present
    pub fn add_delegate<T: Delegate<M, D::Label> + 'static>(&mut self, delegate: T) {
        self.delegates.add(delegate);
    }

    /// Builder form of [`add_delegate`](Self::add_delegate)
    pub fn with_delegate<T: Delegate<M, D::Label> + 'static>(mut self, delegate: T) -> Self {
        self.add_delegate(delegate);
        self
    }

    /// Skip the optimizer update (and `optimizer_did_update`) while iterating
    /// the validation dataset
    pub fn freeze_during_validation(mut self, freeze: bool) -> Self {
        self.freeze_during_validation = freeze;
        self
    }

    /// Whether validation batches leave the parameters untouched
    pub fn is_frozen_during_validation(&self) -> bool {
        self.freeze_during_validation
    }

    /// Number of registered delegates
    pub fn delegate_count(&self) -> usize {
        self.delegates.len()
    }

    /// Names of the registered delegates, in dispatch order
    pub fn delegate_names(&self) -> Vec<&'static str> {
        self.delegates.names()
    }

    /// Read-only view of the training state
    pub fn state(&self) -> &TrainingState<M, D::Label> {
        &self.state
    }

    /// Get reference to the model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get mutable reference to the model
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Get reference to the optimizer
    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Get mutable reference to the optimizer
    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    /// Training and validation datasets
    pub fn data(&self) -> &DataBunch<D> {
        &self.data
    }

    /// Name of the loss function
    pub fn loss_name(&self) -> &str {
        self.loss_fn.name()
    }
}
