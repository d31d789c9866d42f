use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::{MessageLog, Node, NodeError, Status};

/// Advances `node` by one tick.
///
/// 1. A node that is not `Running` is initiated first, opening a new episode.
/// 2. `update` runs once.
/// 3. If the node is no longer `Running`, it is terminated, possibly in the same tick it started.
///
/// A fault in steps 1-2, whether an `Err` from `update` or a panic, is logged, the node is halted,
/// and the tick reports [`Status::Failure`]. The call itself always returns.
pub fn tick<S, M, N>(node: &mut N, state: &S, messages: &mut MessageLog<M>) -> Status
where
    N: Node<S, M> + ?Sized,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        if !node.status().is_running() {
            tracing::trace!(node = node.name(), "initiate");
            node.initiate();
        }
        node.update(state, messages)
    }));

    let fault = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(err),
        Err(payload) => Some(NodeError::Panicked(panic_message(payload.as_ref()))),
    };

    if let Some(err) = fault {
        tracing::error!(node = node.name(), error = %err, "tick.fault");
        guarded(node.name(), "halt", || node.halt());
        return Status::Failure;
    }

    let status = node.status();
    if status.is_done() {
        tracing::trace!(node = node.name(), %status, "terminate");
        guarded(node.name(), "terminate", || node.terminate());
    }
    status
}

/// Abandons the running episode of `node`, if any.
pub fn halt<S, M, N>(node: &mut N)
where
    N: Node<S, M> + ?Sized,
{
    if node.status().is_running() {
        tracing::trace!(node = node.name(), "halt");
        guarded(node.name(), "halt", || node.halt());
    }
}

fn guarded(node: &'static str, hook: &'static str, f: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        tracing::error!(
            node,
            hook,
            error = %panic_message(payload.as_ref()),
            "tick.hook_panicked"
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
