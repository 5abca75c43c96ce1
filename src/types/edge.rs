//! The undirected, weighted edge struct.

use serde::{Deserialize, Serialize};

/// An undirected connection between two stations.
///
/// `from`/`to` record the order the edge was added in; the connection itself
/// is symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint, as given when the edge was added.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Travel cost between the two stations.
    pub weight: f64,
}

impl Edge {
    /// Create an edge with an explicit weight.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ({})", self.from, self.to, self.weight)
    }
}
