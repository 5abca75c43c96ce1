//! Core graph structure — named stations + undirected weighted edges.

use std::collections::HashMap;

use log::{debug, warn};

use crate::types::{Edge, GraphError, GraphResult, DEFAULT_WEIGHT};

/// An undirected, simple graph of named stations.
///
/// Stations and each station's adjacency list keep insertion order, which
/// fixes the order DFS and BFS explore neighbours in.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    /// Station labels, indexed by dense node index.
    nodes: Vec<String>,
    /// Label -> node index.
    index: HashMap<String, usize>,
    /// Per-node (neighbour index, weight) lists, symmetric.
    adjacency: Vec<Vec<(usize, f64)>>,
    /// Each undirected edge once, as (first, second) in insertion order.
    edges: Vec<(usize, usize)>,
}

impl TransitGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the station exists.
    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    /// Add a station. Adding an existing label is a no-op.
    ///
    /// Returns true if the station was inserted, false if it already existed.
    pub fn add_node(&mut self, node: impl Into<String>) -> bool {
        let node = node.into();
        if self.index.contains_key(&node) {
            return false;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        true
    }

    /// Connect two existing stations. `None` weight means 1.
    ///
    /// Re-adding an existing pair overwrites its weight; the graph never holds
    /// parallel edges. Negative weights are stored but refused by
    /// [`shortest_paths`](crate::engine::shortest_paths).
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Option<f64>) -> GraphResult<()> {
        let weight = weight.unwrap_or(DEFAULT_WEIGHT);

        let ia = self.index_of(a).ok_or_else(|| GraphError::InvalidEdge {
            from: a.to_string(),
            to: b.to_string(),
            missing: a.to_string(),
        })?;
        let ib = self.index_of(b).ok_or_else(|| GraphError::InvalidEdge {
            from: a.to_string(),
            to: b.to_string(),
            missing: b.to_string(),
        })?;

        if ia == ib {
            return Err(GraphError::SelfLoop(a.to_string()));
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }

        if let Some(slot) = self.adjacency[ia].iter_mut().find(|(n, _)| *n == ib) {
            warn!("Edge {} -- {} already present, weight {} -> {}", a, b, slot.1, weight);
            slot.1 = weight;
            if let Some(back) = self.adjacency[ib].iter_mut().find(|(n, _)| *n == ia) {
                back.1 = weight;
            }
            return Ok(());
        }

        self.adjacency[ia].push((ib, weight));
        self.adjacency[ib].push((ia, weight));
        self.edges.push((ia, ib));
        debug!("Added edge {} -- {} (weight {})", a, b, weight);
        Ok(())
    }

    /// All stations in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Neighbours of `node` with edge weights, in insertion order.
    pub fn neighbors(&self, node: &str) -> GraphResult<Vec<(&str, f64)>> {
        let idx = self.require(node)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(n, w)| (self.nodes[n].as_str(), w))
            .collect())
    }

    /// Number of edges touching `node`.
    pub fn degree(&self, node: &str) -> GraphResult<usize> {
        let idx = self.require(node)?;
        Ok(self.adjacency[idx].len())
    }

    /// Weight of the edge between `a` and `b`, if they are connected.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.adjacency[ia]
            .iter()
            .find(|(n, _)| *n == ib)
            .map(|&(_, w)| w)
    }

    /// Every undirected edge once, in insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|&(a, b)| Edge::new(&self.nodes[a], &self.nodes[b], self.edge_weight(a, b)))
            .collect()
    }

    /// First edge (insertion order) with a negative weight, if any.
    pub fn negative_edge(&self) -> Option<Edge> {
        self.edges
            .iter()
            .find(|&&(a, b)| self.edge_weight(a, b) < 0.0)
            .map(|&(a, b)| Edge::new(&self.nodes[a], &self.nodes[b], self.edge_weight(a, b)))
    }

    /// Dense index for a station label.
    pub(crate) fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Like `index_of` but fails with `NodeNotFound`.
    pub(crate) fn require(&self, node: &str) -> GraphResult<usize> {
        self.index_of(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.to_string()))
    }

    /// Station label for a dense index.
    pub(crate) fn label(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    /// Adjacency list for a dense index.
    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    fn edge_weight(&self, a: usize, b: usize) -> f64 {
        self.adjacency[a]
            .iter()
            .find(|(n, _)| *n == b)
            .map(|&(_, w)| w)
            .unwrap_or(DEFAULT_WEIGHT)
    }
}
