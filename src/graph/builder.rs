//! Fluent API for building TransitGraph instances.

use log::debug;

use crate::types::GraphResult;

use super::TransitGraph;

/// Fluent builder for constructing a TransitGraph.
///
/// Edges are validated in [`build`](Self::build), so stations and connections
/// can be declared in any order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stations: Vec<String>,
    connections: Vec<(String, String, Option<f64>)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(&mut self, name: impl Into<String>) -> &mut Self {
        self.stations.push(name.into());
        self
    }

    /// Add several stations.
    pub fn stations<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stations.extend(names.into_iter().map(Into::into));
        self
    }

    /// Connect two stations with the default weight.
    pub fn connect(&mut self, a: impl Into<String>, b: impl Into<String>) -> &mut Self {
        self.connections.push((a.into(), b.into(), None));
        self
    }

    /// Connect two stations with an explicit weight.
    pub fn connect_weighted(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: f64,
    ) -> &mut Self {
        self.connections.push((a.into(), b.into(), Some(weight)));
        self
    }

    /// Build the final TransitGraph.
    pub fn build(&self) -> GraphResult<TransitGraph> {
        let mut graph = TransitGraph::new();
        for station in &self.stations {
            graph.add_node(station.as_str());
        }
        for (a, b, weight) in &self.connections {
            graph.add_edge(a, b, *weight)?;
        }
        debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
