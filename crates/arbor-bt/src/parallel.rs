//! Composites that tick every child on each cycle and settle on success/failure thresholds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use arbor_core::{tick, BoxedNode, MessageLog, Node, NodeError, Status};

use crate::composite::halt_running;

/// Success/failure thresholds of a parallel node.
///
/// Success is checked first, so a tick that reaches both thresholds succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParallelPolicy {
    pub min_successes: usize,
    pub min_failures: usize,
}

impl ParallelPolicy {
    pub fn bounded(min_successes: usize, min_failures: usize) -> Self {
        Self {
            min_successes,
            min_failures,
        }
    }

    /// "All must" or "any one" for each outcome, over `len` children.
    pub fn all_or_any(len: usize, success_on_all: bool, fail_on_all: bool) -> Self {
        Self {
            min_successes: if success_on_all { len } else { 1 },
            min_failures: if fail_on_all { len } else { 1 },
        }
    }

    pub fn evaluate(&self, successes: usize, failures: usize) -> Status {
        if successes >= self.min_successes {
            Status::Success
        } else if failures >= self.min_failures {
            Status::Failure
        } else {
            Status::Running
        }
    }
}

/// Ticks every child every tick; counts only this tick's results.
pub struct Parallel<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    policy: ParallelPolicy,
    status: Status,
}

impl<S, M> Parallel<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>, policy: ParallelPolicy) -> Self {
        Self {
            children,
            policy,
            status: Status::Failure,
        }
    }

    pub fn bounded(
        children: Vec<BoxedNode<S, M>>,
        min_successes: usize,
        min_failures: usize,
    ) -> Self {
        Self::new(children, ParallelPolicy::bounded(min_successes, min_failures))
    }

    pub fn all_or_any(
        children: Vec<BoxedNode<S, M>>,
        success_on_all: bool,
        fail_on_all: bool,
    ) -> Self {
        let policy = ParallelPolicy::all_or_any(children.len(), success_on_all, fail_on_all);
        Self::new(children, policy)
    }

    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }
}

impl<S, M> Node<S, M> for Parallel<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let mut successes = 0;
        let mut failures = 0;
        for child in self.children.iter_mut() {
            match tick(child, state, messages) {
                Status::Success => successes += 1,
                Status::Failure => failures += 1,
                Status::Running => {}
            }
        }
        self.status = self.policy.evaluate(successes, failures);
        Ok(())
    }

    fn terminate(&mut self) {
        halt_running(&mut self.children);
    }

    fn halt(&mut self) {
        halt_running(&mut self.children);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}

/// [`Parallel`] that freezes children once they settle.
///
/// A settled child is not ticked again until the next episode; its result stays counted.
pub struct ParallelMemory<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    policy: ParallelPolicy,
    completed: Vec<bool>,
    successes: usize,
    failures: usize,
    status: Status,
}

impl<S, M> ParallelMemory<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>, policy: ParallelPolicy) -> Self {
        let completed = vec![false; children.len()];
        Self {
            children,
            policy,
            completed,
            successes: 0,
            failures: 0,
            status: Status::Failure,
        }
    }

    pub fn bounded(
        children: Vec<BoxedNode<S, M>>,
        min_successes: usize,
        min_failures: usize,
    ) -> Self {
        Self::new(children, ParallelPolicy::bounded(min_successes, min_failures))
    }

    pub fn all_or_any(
        children: Vec<BoxedNode<S, M>>,
        success_on_all: bool,
        fail_on_all: bool,
    ) -> Self {
        let policy = ParallelPolicy::all_or_any(children.len(), success_on_all, fail_on_all);
        Self::new(children, policy)
    }

    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }

    /// Which children have settled in the current episode.
    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    /// Running totals for the current episode, as `(successes, failures)`.
    pub fn totals(&self) -> (usize, usize) {
        (self.successes, self.failures)
    }
}

impl<S, M> Node<S, M> for ParallelMemory<S, M> {
    fn initiate(&mut self) {
        self.completed.iter_mut().for_each(|done| *done = false);
        self.successes = 0;
        self.failures = 0;
    }

    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        for (child, done) in self.children.iter_mut().zip(self.completed.iter_mut()) {
            if *done {
                continue;
            }
            match tick(child, state, messages) {
                Status::Success => self.successes += 1,
                Status::Failure => self.failures += 1,
                Status::Running => continue,
            }
            *done = true;
        }
        self.status = self.policy.evaluate(self.successes, self.failures);
        Ok(())
    }

    fn terminate(&mut self) {
        halt_running(&mut self.children);
    }

    fn halt(&mut self) {
        halt_running(&mut self.children);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "ParallelMemory"
    }
}
