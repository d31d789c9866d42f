use std::fmt;

use crate::{tick, BoxedNode, MessageLog, Node, Status};

/// Result of one root tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome<M> {
    pub status: Status,
    pub messages: MessageLog<M>,
}

/// Owns a ready tree and drives its root, once per control cycle.
pub struct BehaviorTree<S, M = ()> {
    root: BoxedNode<S, M>,
    last: Option<Status>,
    ticks: u64,
}

impl<S, M> BehaviorTree<S, M> {
    pub fn new(root: BoxedNode<S, M>) -> Self {
        Self {
            root,
            last: None,
            ticks: 0,
        }
    }

    pub fn from_node(root: impl Node<S, M> + 'static) -> Self {
        Self::new(Box::new(root))
    }

    /// Ticks the root once, threading `messages` through the whole tree.
    pub fn tick(&mut self, state: &S, mut messages: MessageLog<M>) -> TickOutcome<M> {
        self.ticks += 1;
        let _span = tracing::debug_span!("tree.tick", tick = self.ticks).entered();

        let status = tick(&mut self.root, state, &mut messages);
        if status.is_done() {
            tracing::debug!(tick = self.ticks, %status, "tree.episode_end");
        }
        self.last = Some(status);

        TickOutcome { status, messages }
    }

    /// Ticks the root starting from an empty message log.
    pub fn tick_fresh(&mut self, state: &S) -> TickOutcome<M> {
        self.tick(state, MessageLog::new())
    }

    /// Status returned by the most recent tick, `None` before the first one.
    pub fn last_status(&self) -> Option<Status> {
        self.last
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> &dyn Node<S, M> {
        &*self.root
    }

    pub fn root_mut(&mut self) -> &mut dyn Node<S, M> {
        &mut *self.root
    }

    /// Abandons the root's running episode; the next tick starts fresh.
    pub fn halt(&mut self) {
        crate::halt::<S, M, _>(&mut self.root);
    }

    pub fn into_root(self) -> BoxedNode<S, M> {
        self.root
    }
}

impl<S, M> fmt::Debug for BehaviorTree<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorTree")
            .field("root", &self.root.name())
            .field("last", &self.last)
            .field("ticks", &self.ticks)
            .finish()
    }
}
