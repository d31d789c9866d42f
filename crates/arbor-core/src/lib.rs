//! Behavior tree node lifecycle contract and tick driver.
//!
//! Every node obeys the same state machine: [`Node::initiate`] opens a running episode,
//! [`Node::update`] performs one step of work, and [`Node::terminate`] closes the episode once the
//! node stops reporting [`Status::Running`]. [`tick`] is the only entry point that drives a node
//! and it never lets an evaluation fault escape to the caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod message;
pub mod node;
pub mod status;
pub mod tick;
pub mod tree;

pub use error::NodeError;
pub use message::MessageLog;
pub use node::{BoxedNode, Node};
pub use status::Status;
pub use tick::{halt, tick};
pub use tree::{BehaviorTree, TickOutcome};
