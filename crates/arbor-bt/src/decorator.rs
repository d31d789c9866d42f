//! Single-child nodes that transform or gate their child's result.

use std::time::{Duration, Instant};

use arbor_core::{halt, tick, BoxedNode, MessageLog, Node, NodeError, Status};

/// Swaps `Success` and `Failure`; `Running` passes through.
pub struct Inverter<S, M = ()> {
    child: BoxedNode<S, M>,
    status: Status,
}

impl<S, M> Inverter<S, M> {
    pub fn new(child: BoxedNode<S, M>) -> Self {
        Self {
            child,
            status: Status::Failure,
        }
    }
}

impl<S, M> Node<S, M> for Inverter<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        self.status = tick(&mut self.child, state, messages).invert();
        Ok(())
    }

    fn halt(&mut self) {
        halt::<S, M, _>(&mut self.child);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Inverter"
    }
}

/// Ticks the child for its side effects and always reports a fixed status.
///
/// The child keeps its own episodes: a running child is not halted when this node settles, only
/// when this node itself is halted.
pub struct ForceStatus<S, M = ()> {
    child: BoxedNode<S, M>,
    forced: Status,
}

impl<S, M> ForceStatus<S, M> {
    pub fn new(forced: Status, child: BoxedNode<S, M>) -> Self {
        Self { child, forced }
    }

    pub fn success(child: BoxedNode<S, M>) -> Self {
        Self::new(Status::Success, child)
    }

    pub fn failure(child: BoxedNode<S, M>) -> Self {
        Self::new(Status::Failure, child)
    }
}

impl<S, M> Node<S, M> for ForceStatus<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        tick(&mut self.child, state, messages);
        Ok(())
    }

    fn halt(&mut self) {
        halt::<S, M, _>(&mut self.child);
    }

    fn status(&self) -> Status {
        self.forced
    }

    fn name(&self) -> &'static str {
        "ForceStatus"
    }
}

/// Runs the child until it has finished `limit` times, then adopts its last result.
///
/// Reports `Running` in between. A limit of `0` repeats forever.
pub struct Repeater<S, M = ()> {
    child: BoxedNode<S, M>,
    limit: u32,
    count: u32,
    status: Status,
}

impl<S, M> Repeater<S, M> {
    pub fn new(limit: u32, child: BoxedNode<S, M>) -> Self {
        Self {
            child,
            limit,
            count: 0,
            status: Status::Failure,
        }
    }

    pub fn forever(child: BoxedNode<S, M>) -> Self {
        Self::new(0, child)
    }

    /// Child completions in the current episode.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl<S, M> Node<S, M> for Repeater<S, M> {
    fn initiate(&mut self) {
        self.count = 0;
    }

    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        let status = tick(&mut self.child, state, messages);
        if status.is_done() {
            self.count = self.count.saturating_add(1);
        }
        self.status = if self.limit == 0 || self.count < self.limit {
            Status::Running
        } else {
            status
        };
        Ok(())
    }

    fn halt(&mut self) {
        halt::<S, M, _>(&mut self.child);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Repeater"
    }
}

/// Reports `Running` until the child reports `until`, then succeeds.
///
/// A child that settles on anything else starts a fresh episode on the next tick.
pub struct RepeatUntil<S, M = ()> {
    child: BoxedNode<S, M>,
    until: Status,
    status: Status,
}

impl<S, M> RepeatUntil<S, M> {
    pub fn new(until: Status, child: BoxedNode<S, M>) -> Self {
        Self {
            child,
            until,
            status: Status::Failure,
        }
    }

    pub fn until_success(child: BoxedNode<S, M>) -> Self {
        Self::new(Status::Success, child)
    }

    pub fn until_failure(child: BoxedNode<S, M>) -> Self {
        Self::new(Status::Failure, child)
    }
}

impl<S, M> Node<S, M> for RepeatUntil<S, M> {
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        self.status = if tick(&mut self.child, state, messages) == self.until {
            Status::Success
        } else {
            Status::Running
        };
        Ok(())
    }

    fn terminate(&mut self) {
        // Only reachable with a child still running when `until` is `Running`.
        halt::<S, M, _>(&mut self.child);
    }

    fn halt(&mut self) {
        halt::<S, M, _>(&mut self.child);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "RepeatUntil"
    }
}

/// Bounds an episode in wall-clock time.
///
/// The deadline is armed when an episode starts. Once it has passed the node reports
/// `completion` without ticking the child, and a still-running child is halted. A duration too
/// large to add to the current instant, such as [`Duration::MAX`], never expires.
pub struct Timeout<S, M = ()> {
    child: BoxedNode<S, M>,
    duration: Duration,
    completion: Status,
    deadline: Option<Instant>,
    status: Status,
}

impl<S, M> Timeout<S, M> {
    pub fn new(duration: Duration, completion: Status, child: BoxedNode<S, M>) -> Self {
        Self {
            child,
            duration,
            completion,
            deadline: None,
            status: Status::Failure,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl<S, M> Node<S, M> for Timeout<S, M> {
    fn initiate(&mut self) {
        // A deadline past what `Instant` can represent never fires.
        self.deadline = Instant::now().checked_add(self.duration);
    }

    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        self.status = if self.expired() {
            self.completion
        } else {
            tick(&mut self.child, state, messages)
        };
        Ok(())
    }

    fn terminate(&mut self) {
        self.deadline = None;
        halt::<S, M, _>(&mut self.child);
    }

    fn halt(&mut self) {
        self.deadline = None;
        halt::<S, M, _>(&mut self.child);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Timeout"
    }
}
