//! Ordered station sequences returned by path queries.

use serde::Serialize;

use crate::graph::TransitGraph;

/// An ordered, loop-free sequence of stations from a start to a goal.
///
/// Consecutive stations are always joined by an edge of the graph the path
/// was computed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<String>,
}

impl Path {
    pub(crate) fn from_nodes(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    /// Stations in travel order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// First station.
    pub fn start(&self) -> &str {
        self.nodes.first().map(String::as_str).unwrap_or_default()
    }

    /// Last station.
    pub fn goal(&self) -> &str {
        self.nodes.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of stations on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for paths returned by the traversal and shortest-path engines.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of hops.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Sum of edge weights along the path in `graph`.
    ///
    /// Returns None if two consecutive stations are not connected there.
    pub fn total_weight(&self, graph: &TransitGraph) -> Option<f64> {
        self.nodes
            .windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]))
            .sum()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}
