//! Error types for the transit graph library.

use thiserror::Error;

/// All errors that can occur while building or querying a transit graph.
///
/// An unreachable goal is not an error: traversal returns `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge references a node that was never added to the graph.
    #[error("Edge {from} -- {to} references unknown node: {missing}")]
    InvalidEdge {
        from: String,
        to: String,
        missing: String,
    },

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(String),

    /// Edge weight is NaN or infinite.
    #[error("Edge {from} -- {to} has a non-finite weight: {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Query names a node absent from the graph.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Negative edge weight handed to the shortest-path engine.
    #[error("Negative edge weight is unsupported for shortest paths: {from} -- {to} = {weight}")]
    UnsupportedInput { from: String, to: String, weight: f64 },

    /// A path length overflowed to infinity during shortest-path relaxation.
    #[error("Shortest-path distance overflows at edge {from} -- {to}")]
    DistanceOverflow { from: String, to: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed network description.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for transit graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
