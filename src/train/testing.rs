//! Test delegates shared by the dispatcher and learner tests

use crate::nn::Model;
use crate::train::delegate::{Delegate, DelegateAction, Hook, HookResult};
use crate::train::state::TrainingState;
use std::cell::RefCell;
use std::rc::Rc;

/// Where in the loop a hook fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Point {
    pub epoch: usize,
    pub batch: usize,
    pub in_train: bool,
}

impl Point {
    fn of<M: Model, L>(state: &TrainingState<M, L>) -> Self {
        Self {
            epoch: state.current_epoch(),
            batch: state.batch_index(),
            in_train: state.in_train(),
        }
    }
}

/// One recorded hook firing
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Event {
    pub label: &'static str,
    pub hook: Hook,
    pub point: Point,
    pub pct_epochs: f32,
}

/// Shared, cloneable log of hook firings
#[derive(Clone, Default)]
pub(crate) struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// `"label:hook"` strings in firing order
    pub fn entries(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(|e| format!("{}:{}", e.label, e.hook))
            .collect()
    }

    /// Full event records
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Number of entries equal to `entry`
    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| *e == entry).count()
    }

    /// Firings of `hook`, as loop points
    pub fn points(&self, hook: Hook) -> Vec<Point> {
        self.0
            .borrow()
            .iter()
            .filter(|e| e.hook == hook)
            .map(|e| e.point)
            .collect()
    }
}

/// Records every hook into an [`EventLog`] and always continues
pub(crate) struct Recorder {
    label: &'static str,
    log: EventLog,
}

impl Recorder {
    pub fn new(label: &'static str, log: EventLog) -> Self {
        Self { label, log }
    }

    fn record<M: Model, L>(&self, hook: Hook, state: &TrainingState<M, L>) -> HookResult {
        self.log.push(Event {
            label: self.label,
            hook,
            point: Point::of(state),
            pct_epochs: state.pct_epochs(),
        });
        Ok(DelegateAction::Continue)
    }
}

impl<M: Model, L> Delegate<M, L> for Recorder {
    fn training_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::TrainingWillStart, state)
    }
    fn training_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::TrainingDidFinish, state)
    }
    fn epoch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::EpochWillStart, state)
    }
    fn epoch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::EpochDidFinish, state)
    }
    fn validation_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::ValidationWillStart, state)
    }
    fn batch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::BatchWillStart, state)
    }
    fn batch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::BatchDidFinish, state)
    }
    fn learner_did_produce_new_gradient(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::LearnerDidProduceNewGradient, state)
    }
    fn optimizer_did_update(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.record(Hook::OptimizerDidUpdate, state)
    }
    fn name(&self) -> &'static str {
        "Recorder"
    }
}

/// Returns `action` from `hook` whenever `when` matches the loop point
pub(crate) struct Scripted {
    hook: Hook,
    action: DelegateAction,
    when: Box<dyn Fn(Point) -> bool>,
}

impl Scripted {
    pub fn always(hook: Hook, action: DelegateAction) -> Self {
        Self::when(hook, action, |_| true)
    }

    pub fn when(hook: Hook, action: DelegateAction, when: impl Fn(Point) -> bool + 'static) -> Self {
        Self {
            hook,
            action,
            when: Box::new(when),
        }
    }

    pub fn at_epoch(hook: Hook, action: DelegateAction, epoch: usize) -> Self {
        Self::when(hook, action, move |p| p.epoch == epoch)
    }

    pub fn at_batch(hook: Hook, action: DelegateAction, in_train: bool, batch: usize) -> Self {
        Self::when(hook, action, move |p| p.in_train == in_train && p.batch == batch)
    }

    fn check<M: Model, L>(&self, hook: Hook, state: &TrainingState<M, L>) -> HookResult {
        if hook == self.hook && (self.when)(Point::of(state)) {
            Ok(self.action)
        } else {
            Ok(DelegateAction::Continue)
        }
    }
}

impl<M: Model, L> Delegate<M, L> for Scripted {
    fn training_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::TrainingWillStart, state)
    }
    fn training_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::TrainingDidFinish, state)
    }
    fn epoch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::EpochWillStart, state)
    }
    fn epoch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::EpochDidFinish, state)
    }
    fn validation_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::ValidationWillStart, state)
    }
    fn batch_will_start(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::BatchWillStart, state)
    }
    fn batch_did_finish(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::BatchDidFinish, state)
    }
    fn learner_did_produce_new_gradient(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::LearnerDidProduceNewGradient, state)
    }
    fn optimizer_did_update(&mut self, state: &mut TrainingState<M, L>) -> HookResult {
        self.check(Hook::OptimizerDidUpdate, state)
    }
    fn name(&self) -> &'static str {
        "Scripted"
    }
}
