use std::fmt::Debug;
use thiserror::Error;

/// Error produced when a graph mutation refers to something the graph
/// does not know about.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Vertex {0} is not registered in the graph")]
    UnknownVertex(String),
}

impl GraphError {
    pub(crate) fn unknown<I: Debug>(id: &I) -> Self {
        GraphError::UnknownVertex(format!("{:?}", id))
    }
}

/// Result when a graph operation might fail.
pub type Result<T> = std::result::Result<T, GraphError>;
