//! Single batch step

use super::core::Learner;
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::nn::Model;
use crate::optim::Optimizer;
use crate::train::delegate::{DelegateAction, Delegates, Hook};
use crate::train::loss::LossFn;
use crate::train::state::TrainingState;

impl<M, O, D> Learner<M, O, D>
where
    M: Model,
    O: Optimizer<M::Parameters>,
    D: Dataset<Input = M::Input>,
{
    /// Forward, loss, backward and update on the batch held in `state`
    ///
    /// Takes the learner's parts separately so the caller can keep borrowing
    /// the dataset it is iterating. Fires `learner_did_produce_new_gradient`
    /// and, when `apply_update` is set, `optimizer_did_update`. Returns the
    /// first interrupting action, if any.
    pub(super) fn train_on_batch(
        model: &mut M,
        optimizer: &mut O,
        loss_fn: &dyn LossFn<M::Output, D::Label>,
        delegates: &mut Delegates<M, D::Label>,
        state: &mut TrainingState<M, D::Label>,
        apply_update: bool,
    ) -> Result<DelegateAction> {
        let mode = state.mode();
        let (output, loss, gradient) = {
            let input = state
                .current_input()
                .ok_or(Error::MissingBatch("train_on_batch"))?;
            let target = state
                .current_target()
                .ok_or(Error::MissingBatch("train_on_batch"))?;

            let output = model.forward(input, mode)?;
            let loss = loss_fn.forward(&output, target)?;
            let output_grad = loss_fn.gradient(&output, target)?;
            let gradient = model.backward(input, &output_grad, mode)?;
            (output, loss, gradient)
        };
        state.record_step(output, loss, gradient);

        let action = delegates.fire(Hook::LearnerDidProduceNewGradient, state)?;
        if action != DelegateAction::Continue || !apply_update {
            return Ok(action);
        }

        // delegates may have rewritten the gradient; use what is in the state
        if let Some(gradient) = state.current_gradient() {
            optimizer.update(model.parameters_mut(), gradient)?;
        }
        delegates.fire(Hook::OptimizerDidUpdate, state)
    }
}
