use crate::{MessageLog, NodeError, Status};

/// Capability set every behavior tree node implements.
///
/// `S` is the read-only state the whole tree is evaluated against and `M` is the element type of
/// the [`MessageLog`] threaded through a tick. Trees that need neither use `()` for both.
///
/// Nodes are never driven directly; callers go through [`tick`](crate::tick), which decides when
/// to call [`initiate`](Node::initiate) and [`terminate`](Node::terminate) around
/// [`update`](Node::update).
pub trait Node<S, M = ()> {
    /// Resets per-episode state. Called when the node is ticked while not `Running`.
    fn initiate(&mut self) {}

    /// Performs exactly one step of work and records the resulting status.
    ///
    /// Appending to `messages` makes the entries visible to every node ticked later in the same
    /// tick. Returning `Err` marks the tick as a fault; the driver reports `Failure` for it.
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError>;

    /// Cleans up after an episode. Called right after an `update` that left the node not
    /// `Running`.
    fn terminate(&mut self) {}

    /// Abandons a `Running` episode from outside, e.g. when the parent settles first.
    ///
    /// Nodes holding resources release them here, halt their own running children, and leave a
    /// non-`Running` status so the next tick opens a fresh episode. The default only terminates,
    /// so implementors that keep per-episode state or can report `Running` should override it.
    fn halt(&mut self) {
        self.terminate();
    }

    /// Last status computed by `update`.
    fn status(&self) -> Status;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

pub type BoxedNode<S, M = ()> = Box<dyn Node<S, M>>;

impl<S, M, N> Node<S, M> for Box<N>
where
    N: Node<S, M> + ?Sized,
{
    #[inline]
    fn initiate(&mut self) {
        (**self).initiate();
    }

    #[inline]
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        (**self).update(state, messages)
    }

    #[inline]
    fn terminate(&mut self) {
        (**self).terminate();
    }

    #[inline]
    fn halt(&mut self) {
        (**self).halt();
    }

    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
