//! Behavior tree node library built on `arbor-core`.
//!
//! - Leaves: [`Constant`], [`Predicate`], [`Action`], [`Emit`] and the thread-backed [`Worker`].
//! - Decorators: [`Inverter`], [`ForceStatus`], [`Repeater`], [`RepeatUntil`], [`Timeout`].
//! - Ordered composites: [`Selector`], [`Sequence`] and their memory variants [`MemSelector`],
//!   [`MemSequence`].
//! - Parallel composites: [`Parallel`], [`ParallelMemory`], configured by [`ParallelPolicy`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod parallel;
pub mod worker;

pub use arbor_core::{halt, tick, BehaviorTree, BoxedNode, MessageLog, Node, NodeError, Status};
pub use composite::{MemSelector, MemSequence, Selector, Sequence};
pub use decorator::{ForceStatus, Inverter, RepeatUntil, Repeater, Timeout};
pub use leaf::{Action, Constant, Emit, Predicate};
pub use parallel::{Parallel, ParallelMemory, ParallelPolicy};
pub use worker::Worker;
