//! Serde model of a tree document.
//!
//! ```json
//! {
//!   "name": "guards",
//!   "data": {
//!     "trees": [{
//!       "title": "patrol",
//!       "root": "a",
//!       "nodes": {
//!         "a": { "id": "a", "name": "Sequence", "children": ["b", "c"] },
//!         "b": { "id": "b", "name": "Succeeder" },
//!         "c": { "id": "c", "name": "MaxTime", "properties": { "maxTime": 500 }, "child": "b" }
//!       }
//!     }]
//!   }
//! }
//! ```
//!
//! Every field is optional; missing fields take their empty defaults.

use std::collections::BTreeMap;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use arbor_core::BehaviorTree;

use crate::{BuildError, Registry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub data: ProjectData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    pub trees: Vec<TreeDef>,
}

/// One tree: its nodes keyed by id, and the id of its root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeDef {
    pub title: String,
    pub root: String,
    pub nodes: BTreeMap<String, NodeDef>,
}

/// One node: a registered type name plus its properties and child references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDef {
    pub id: String,
    /// Type name looked up in the [`Registry`].
    pub name: String,
    pub properties: Map<String, Value>,
    /// Child of a decorator.
    pub child: Option<String>,
    /// Children of a composite, in order.
    pub children: Vec<String>,
}

impl Project {
    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, BuildError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, BuildError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn trees(&self) -> &[TreeDef] {
        &self.data.trees
    }

    pub fn tree(&self, title: &str) -> Option<&TreeDef> {
        self.data.trees.iter().find(|tree| tree.title == title)
    }

    /// Builds every tree in document order. Stops at the first error.
    pub fn build_trees<S: 'static, M: 'static>(
        &self,
        registry: &Registry<S, M>,
    ) -> Result<Vec<BehaviorTree<S, M>>, BuildError> {
        self.data
            .trees
            .iter()
            .map(|tree| registry.build(tree).map(BehaviorTree::new))
            .collect()
    }

    pub fn build_tree<S: 'static, M: 'static>(
        &self,
        title: &str,
        registry: &Registry<S, M>,
    ) -> Result<BehaviorTree<S, M>, BuildError> {
        let tree = self
            .tree(title)
            .ok_or_else(|| BuildError::UnknownTree(title.to_string()))?;
        registry.build(tree).map(BehaviorTree::new)
    }
}

impl NodeDef {
    /// Decodes property `key`, `None` when it is absent.
    pub fn property<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, BuildError> {
        let Some(value) = self.properties.get(key) else {
            return Ok(None);
        };
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| BuildError::InvalidProperty {
                id: self.id.clone(),
                property: key.to_string(),
                reason: err.to_string(),
            })
    }

    /// Like [`NodeDef::property`], but a missing property is an error.
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T, BuildError> {
        self.property(key)?
            .ok_or_else(|| BuildError::MissingProperty {
                id: self.id.clone(),
                property: key.to_string(),
            })
    }
}
