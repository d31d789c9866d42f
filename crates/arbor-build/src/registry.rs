//! Type-name to constructor mapping and the recursive tree builder.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use arbor_bt::builder;
use arbor_bt::ParallelPolicy;
use arbor_core::{BoxedNode, Status};

use crate::{BuildError, NodeDef, TreeDef};

type Constructor<S, M> =
    Box<dyn Fn(&NodeDef, &mut TreeBuilder<'_, S, M>) -> Result<BoxedNode<S, M>, BuildError>>;

/// Constructors for the node types a document may name.
///
/// Nothing is registered implicitly: start from [`Registry::new`] or [`Registry::with_builtins`]
/// and [`register`](Registry::register) application leaves on top.
pub struct Registry<S, M = ()> {
    constructors: HashMap<String, Constructor<S, M>>,
}

impl<S, M> Default for Registry<S, M> {
    fn default() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }
}

impl<S, M> fmt::Debug for Registry<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("types", &names).finish()
    }
}

impl<S, M> Registry<S, M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl<S: 'static, M: 'static> Registry<S, M> {
    /// Registry preloaded with the library's composites, decorators and constant leaves.
    ///
    /// | Type | Node | Properties |
    /// |---|---|---|
    /// | `Priority`, `MemPriority` | selector | |
    /// | `Sequence`, `MemSequence` | sequence | |
    /// | `ParallelSequence`, `MemParallelSequence` | parallel | `minSuccess`, `minFail` |
    /// | `Repeat` | repeater | `limit` (optional; absent, zero or negative is unbounded) |
    /// | `RepeatUntilSuccess`, `RepeatUntilFailure` | repeat until | |
    /// | `Inverter` | inverter | |
    /// | `MaxTime` | timeout | `maxTime` (ms), `completion` (optional, `Failure`) |
    /// | `AlwaysSucceed`, `AlwaysFail` | forced status | |
    /// | `Succeeder`, `Failer`, `Runner` | constant leaf | |
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("Priority", |def, b| Ok(builder::selector(b.children(def)?)))
            .register("MemPriority", |def, b| {
                Ok(builder::mem_selector(b.children(def)?))
            })
            .register("Sequence", |def, b| Ok(builder::sequence(b.children(def)?)))
            .register("MemSequence", |def, b| {
                Ok(builder::mem_sequence(b.children(def)?))
            })
            .register("ParallelSequence", |def, b| {
                let policy = parallel_policy(def)?;
                Ok(builder::parallel(policy, b.children(def)?))
            })
            .register("MemParallelSequence", |def, b| {
                let policy = parallel_policy(def)?;
                Ok(builder::parallel_memory(policy, b.children(def)?))
            })
            .register("Repeat", |def, b| {
                // Zero or negative repeats forever.
                let limit = def.property::<i64>("limit")?.unwrap_or(0);
                let limit = u32::try_from(limit.max(0)).unwrap_or(u32::MAX);
                Ok(builder::repeat(limit, b.child(def)?))
            })
            .register("RepeatUntilSuccess", |def, b| {
                Ok(builder::repeat_until(Status::Success, b.child(def)?))
            })
            .register("RepeatUntilFailure", |def, b| {
                Ok(builder::repeat_until(Status::Failure, b.child(def)?))
            })
            .register("Inverter", |def, b| Ok(builder::inverter(b.child(def)?)))
            .register("MaxTime", |def, b| {
                let millis = def.require::<u64>("maxTime")?;
                let completion = def
                    .property::<Status>("completion")?
                    .unwrap_or(Status::Failure);
                Ok(builder::timeout(
                    Duration::from_millis(millis),
                    completion,
                    b.child(def)?,
                ))
            })
            .register("AlwaysSucceed", |def, b| {
                Ok(builder::force(Status::Success, b.child(def)?))
            })
            .register("AlwaysFail", |def, b| {
                Ok(builder::force(Status::Failure, b.child(def)?))
            })
            .register("Succeeder", |_, _| Ok(builder::constant(Status::Success)))
            .register("Failer", |_, _| Ok(builder::constant(Status::Failure)))
            .register("Runner", |_, _| Ok(builder::constant(Status::Running)));
        registry
    }

    /// Adds a constructor for `name`, replacing any previous one.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: impl Fn(&NodeDef, &mut TreeBuilder<'_, S, M>) -> Result<BoxedNode<S, M>, BuildError>
            + 'static,
    ) -> &mut Self {
        self.constructors.insert(name.into(), Box::new(constructor));
        self
    }

    /// Builds the root of `tree` and everything it references.
    pub fn build(&self, tree: &TreeDef) -> Result<BoxedNode<S, M>, BuildError> {
        let root = TreeBuilder::new(self, tree).node(&tree.root)?;
        tracing::debug!(title = %tree.title, nodes = tree.nodes.len(), "build.tree");
        Ok(root)
    }
}

fn parallel_policy(def: &NodeDef) -> Result<ParallelPolicy, BuildError> {
    Ok(ParallelPolicy::bounded(
        def.require("minSuccess")?,
        def.require("minFail")?,
    ))
}

/// Resolves node references within one tree while constructors run.
///
/// Each id is built fresh wherever it is referenced, so a node shared by two parents becomes
/// two independent nodes. A reference back to an ancestor is a [`BuildError::Cycle`].
pub struct TreeBuilder<'a, S, M = ()> {
    registry: &'a Registry<S, M>,
    tree: &'a TreeDef,
    ancestors: Vec<&'a str>,
}

impl<'a, S: 'static, M: 'static> TreeBuilder<'a, S, M> {
    pub fn new(registry: &'a Registry<S, M>, tree: &'a TreeDef) -> Self {
        Self {
            registry,
            tree,
            ancestors: Vec::new(),
        }
    }

    pub fn tree(&self) -> &'a TreeDef {
        self.tree
    }

    /// Builds the node with id `id`.
    pub fn node(&mut self, id: &str) -> Result<BoxedNode<S, M>, BuildError> {
        let tree = self.tree;
        let Some((key, def)) = tree.nodes.get_key_value(id) else {
            return Err(BuildError::MissingNode(id.to_string()));
        };
        if self.ancestors.contains(&key.as_str()) {
            return Err(BuildError::Cycle(id.to_string()));
        }

        let registry = self.registry;
        let Some(constructor) = registry.constructors.get(&def.name) else {
            tracing::warn!(id, name = %def.name, "build.unknown_type");
            return Err(BuildError::UnknownNodeType {
                id: id.to_string(),
                name: def.name.clone(),
            });
        };

        self.ancestors.push(key);
        let built = constructor(def, self);
        self.ancestors.pop();
        built
    }

    /// Builds the decorator child referenced by `def`.
    pub fn child(&mut self, def: &NodeDef) -> Result<BoxedNode<S, M>, BuildError> {
        match def.child.as_deref() {
            Some(id) => self.node(id),
            None => Err(BuildError::MissingChild {
                id: def.id.clone(),
                name: def.name.clone(),
            }),
        }
    }

    /// Builds the composite children referenced by `def`, in order.
    pub fn children(&mut self, def: &NodeDef) -> Result<Vec<BoxedNode<S, M>>, BuildError> {
        def.children.iter().map(|id| self.node(id)).collect()
    }
}
