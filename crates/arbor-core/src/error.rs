use thiserror::Error;

/// Evaluation fault raised by [`Node::update`](crate::Node::update).
///
/// The tick driver turns every fault into [`Status::Failure`](crate::Status::Failure) for the
/// tick in which it happened; it never reaches the caller of [`tick`](crate::tick).
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("node fault: {0}")]
    Fault(String),

    #[error("worker disconnected before replying")]
    WorkerDisconnected,

    #[error("node panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NodeError {
    pub fn fault(message: impl Into<String>) -> Self {
        NodeError::Fault(message.into())
    }
}
