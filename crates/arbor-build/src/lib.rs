//! Construction layer: turns tree documents into ready-to-tick [`arbor_core::BehaviorTree`]s.
//!
//! ```rust,ignore
//! let mut registry = Registry::<World, String>::with_builtins();
//! registry.register("SeeEnemy", |_, _| Ok(builder::predicate(|w: &World| w.enemy_visible)));
//!
//! let project = Project::from_json_str(&json)?;
//! let mut tree = project.build_tree("guard", &registry)?;
//! ```

#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod registry;

pub use document::{NodeDef, Project, ProjectData, TreeDef};
pub use error::BuildError;
pub use registry::{Registry, TreeBuilder};
