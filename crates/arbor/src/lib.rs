//! Umbrella crate that re-exports the `arbor-*` building blocks.
//!
//! - [`core`]: node lifecycle, tick driver with failure isolation, root runner.
//! - [`bt`]: the node library.
//! - [`build`]: trees from JSON/YAML documents through an explicit registry.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use arbor_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use arbor_bt as bt;

#[cfg(feature = "build")]
#[cfg_attr(docsrs, doc(cfg(feature = "build")))]
pub use arbor_build as build;

/// The types most trees need, in one import.
#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub mod prelude {
    pub use arbor_bt::builder::*;
    pub use arbor_bt::{
        BehaviorTree, BoxedNode, MessageLog, Node, NodeError, ParallelPolicy, Status,
    };

    #[cfg(feature = "build")]
    pub use arbor_build::{BuildError, Project, Registry};
}
