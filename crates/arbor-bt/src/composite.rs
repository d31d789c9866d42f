//! Ordered composites: "first success wins" and "first failure wins".
//!
//! All four nodes share [`scan`]. The plain variants restart the scan from the first child on
//! every tick; the memory variants resume from the child that was still running, so children
//! that already settled in the current episode are not ticked again.

use arbor_core::{halt, tick, BoxedNode, MessageLog, Node, NodeError, Status};

/// Ticks `children` in order from `start` while each reports `continue_on`.
///
/// Returns the status and index of the first child that reported anything else, or
/// `(continue_on, children.len())` once every child has been consumed.
pub(crate) fn scan<S, M>(
    children: &mut [BoxedNode<S, M>],
    start: usize,
    continue_on: Status,
    state: &S,
    messages: &mut MessageLog<M>,
) -> (Status, usize) {
    for (index, child) in children.iter_mut().enumerate().skip(start) {
        let status = tick(child, state, messages);
        if status != continue_on {
            return (status, index);
        }
    }
    (continue_on, children.len())
}

/// Halts every child that is still `Running`.
pub(crate) fn halt_running<S, M>(children: &mut [BoxedNode<S, M>]) {
    for child in children.iter_mut() {
        halt::<S, M, _>(child);
    }
}

/// Halts children past `index` that a previous tick left running.
fn halt_preempted<S, M>(children: &mut [BoxedNode<S, M>], index: usize) {
    if let Some(rest) = children.get_mut(index + 1..) {
        halt_running(rest);
    }
}

/// Returns the first child result that is not `Failure`; `Failure` when all children fail.
pub struct Selector<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    status: Status,
}

impl<S, M> Selector<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>) -> Self {
        Self {
            children,
            status: Status::Failure,
        }
    }

    pub fn children(&self) -> &[BoxedNode<S, M>] {
        &self.children
    }
}

impl<S, M> Node<S, M> for Selector<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let (status, index) = scan(&mut self.children, 0, Status::Failure, state, messages);
        halt_preempted(&mut self.children, index);
        self.status = status;
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
        "Selector"
    }
}

/// Returns the first child result that is not `Success`; `Success` when all children succeed.
pub struct Sequence<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    status: Status,
}

impl<S, M> Sequence<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>) -> Self {
        Self {
            children,
            status: Status::Failure,
        }
    }

    pub fn children(&self) -> &[BoxedNode<S, M>] {
        &self.children
    }
}

impl<S, M> Node<S, M> for Sequence<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let (status, index) = scan(&mut self.children, 0, Status::Success, state, messages);
        halt_preempted(&mut self.children, index);
        self.status = status;
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
        "Sequence"
    }
}

/// [`Selector`] that resumes from the running child instead of re-checking earlier ones.
pub struct MemSelector<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    index: usize,
    status: Status,
}

impl<S, M> MemSelector<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>) -> Self {
        Self {
            children,
            index: 0,
            status: Status::Failure,
        }
    }

    /// Child the next tick resumes from.
    pub fn current_index(&self) -> usize {
        self.index
    }
}

impl<S, M> Node<S, M> for MemSelector<S, M> {
    fn initiate(&mut self) {
        self.index = 0;
    }

    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let (status, index) =
            scan(&mut self.children, self.index, Status::Failure, state, messages);
        self.status = status;
        self.index = index;
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
        "MemSelector"
    }
}

/// [`Sequence`] that resumes from the running child instead of re-running earlier ones.
///
/// Use it when earlier children have side effects that must not repeat within one episode.
pub struct MemSequence<S, M = ()> {
    children: Vec<BoxedNode<S, M>>,
    index: usize,
    status: Status,
}

impl<S, M> MemSequence<S, M> {
    pub fn new(children: Vec<BoxedNode<S, M>>) -> Self {
        Self {
            children,
            index: 0,
            status: Status::Failure,
        }
    }

    /// Child the next tick resumes from.
    pub fn current_index(&self) -> usize {
        self.index
    }
}

impl<S, M> Node<S, M> for MemSequence<S, M> {
    fn initiate(&mut self) {
        self.index = 0;
    }

    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let (status, index) =
            scan(&mut self.children, self.index, Status::Success, state, messages);
        self.status = status;
        self.index = index;
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
        "MemSequence"
    }
}
