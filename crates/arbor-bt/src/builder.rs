//! Helpers for assembling trees in code.
//!
//! Each function boxes the node it builds, so trees read as nested calls instead of
//! `Box::new(Sequence::new(vec![...]))` chains.

use std::sync::mpsc::{Receiver, SyncSender};
use std::time::Duration;

use arbor_core::{BoxedNode, MessageLog, NodeError, Status};

use crate::{
    Action, Constant, Emit, ForceStatus, Inverter, MemSelector, MemSequence, Parallel,
    ParallelMemory, ParallelPolicy, Predicate, RepeatUntil, Repeater, Selector, Sequence, Timeout,
    Worker,
};

#[inline]
pub fn sequence<S: 'static, M: 'static>(children: Vec<BoxedNode<S, M>>) -> BoxedNode<S, M> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<S: 'static, M: 'static>(children: Vec<BoxedNode<S, M>>) -> BoxedNode<S, M> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn mem_sequence<S: 'static, M: 'static>(children: Vec<BoxedNode<S, M>>) -> BoxedNode<S, M> {
    Box::new(MemSequence::new(children))
}

#[inline]
pub fn mem_selector<S: 'static, M: 'static>(children: Vec<BoxedNode<S, M>>) -> BoxedNode<S, M> {
    Box::new(MemSelector::new(children))
}

#[inline]
pub fn parallel<S: 'static, M: 'static>(
    policy: ParallelPolicy,
    children: Vec<BoxedNode<S, M>>,
) -> BoxedNode<S, M> {
    Box::new(Parallel::new(children, policy))
}

#[inline]
pub fn parallel_memory<S: 'static, M: 'static>(
    policy: ParallelPolicy,
    children: Vec<BoxedNode<S, M>>,
) -> BoxedNode<S, M> {
    Box::new(ParallelMemory::new(children, policy))
}

#[inline]
pub fn inverter<S: 'static, M: 'static>(child: BoxedNode<S, M>) -> BoxedNode<S, M> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn force<S: 'static, M: 'static>(status: Status, child: BoxedNode<S, M>) -> BoxedNode<S, M> {
    Box::new(ForceStatus::new(status, child))
}

/// `limit == 0` repeats forever.
#[inline]
pub fn repeat<S: 'static, M: 'static>(limit: u32, child: BoxedNode<S, M>) -> BoxedNode<S, M> {
    Box::new(Repeater::new(limit, child))
}

#[inline]
pub fn repeat_until<S: 'static, M: 'static>(
    until: Status,
    child: BoxedNode<S, M>,
) -> BoxedNode<S, M> {
    Box::new(RepeatUntil::new(until, child))
}

#[inline]
pub fn timeout<S: 'static, M: 'static>(
    duration: Duration,
    completion: Status,
    child: BoxedNode<S, M>,
) -> BoxedNode<S, M> {
    Box::new(Timeout::new(duration, completion, child))
}

#[inline]
pub fn constant<S: 'static, M: 'static>(status: Status) -> BoxedNode<S, M> {
    Box::new(Constant::new(status))
}

#[inline]
pub fn predicate<S: 'static, M: 'static>(
    predicate: impl FnMut(&S) -> bool + 'static,
) -> BoxedNode<S, M> {
    Box::new(Predicate::new(predicate))
}

#[inline]
pub fn action<S: 'static, M: 'static>(
    action: impl FnMut(&S, &mut MessageLog<M>) -> Result<Status, NodeError> + 'static,
) -> BoxedNode<S, M> {
    Box::new(Action::new(action))
}

#[inline]
pub fn emit<S: 'static, M: Clone + 'static>(message: M) -> BoxedNode<S, M> {
    Box::new(Emit::new(message))
}

#[inline]
pub fn worker<S: Clone + Send + 'static, M: 'static>(
    handler: impl Fn(Receiver<S>, SyncSender<Status>) + Send + Sync + 'static,
) -> BoxedNode<S, M> {
    Box::new(Worker::new(handler))
}
