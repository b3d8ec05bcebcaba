//! Error types for the weighted graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// Malformed `U:V[:W]` edge specification.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),

    /// Edge weight could not be parsed or is NaN.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
