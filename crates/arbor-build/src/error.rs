use thiserror::Error;

/// Why a tree document could not be turned into nodes.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("node `{id}` has unregistered type `{name}`")]
    UnknownNodeType { id: String, name: String },

    #[error("node `{0}` is referenced but not defined")]
    MissingNode(String),

    #[error("node `{id}` ({name}) has no child")]
    MissingChild { id: String, name: String },

    #[error("node `{0}` references itself through its descendants")]
    Cycle(String),

    #[error("node `{id}` is missing required property `{property}`")]
    MissingProperty { id: String, property: String },

    #[error("node `{id}` has invalid property `{property}`: {reason}")]
    InvalidProperty {
        id: String,
        property: String,
        reason: String,
    },

    #[error("no tree titled `{0}`")]
    UnknownTree(String),

    #[error("failed to decode JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
