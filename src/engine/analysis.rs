//! Descriptive statistics over a graph.

use serde::Serialize;

use crate::graph::TransitGraph;

/// Summary statistics for a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// (station, degree) in graph node order.
    pub degrees: Vec<(String, usize)>,
    /// Sum of degrees / node count; 0.0 for an empty graph.
    pub average_degree: f64,
    /// Stations with degree 0.
    pub isolated: Vec<String>,
}

/// Compute node/edge counts, degrees and isolated stations.
pub fn analyze(graph: &TransitGraph) -> GraphStats {
    let degrees: Vec<(String, usize)> = (0..graph.node_count())
        .map(|idx| (graph.label(idx).to_string(), graph.adjacent(idx).len()))
        .collect();

    let total: usize = degrees.iter().map(|(_, d)| d).sum();
    let average_degree = if degrees.is_empty() {
        0.0
    } else {
        total as f64 / degrees.len() as f64
    };

    let isolated = degrees
        .iter()
        .filter(|(_, d)| *d == 0)
        .map(|(n, _)| n.clone())
        .collect();

    GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        degrees,
        average_degree,
        isolated,
    }
}
