//! Single-source shortest paths (Dijkstra) over non-negative edge weights.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::graph::traversal::reconstruct;
use crate::graph::TransitGraph;
use crate::types::{GraphError, GraphResult, Path};

/// Station -> shortest distance from the source (`f64::INFINITY` if unreachable).
pub type DistanceMap = HashMap<String, f64>;

/// Station -> previous station on a shortest path (None for the source and
/// unreachable stations).
pub type PredecessorMap = HashMap<String, Option<String>>;

/// Priority-queue entry. Ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// The shortest-distance tree rooted at one source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g TransitGraph,
    source: usize,
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
    expanded: usize,
    stale: usize,
}

impl<'g> ShortestPaths<'g> {
    /// The source station.
    pub fn source(&self) -> &'g str {
        self.graph.label(self.source)
    }

    /// Shortest distance to `node`. `INFINITY` if unreachable, None if unknown.
    pub fn distance(&self, node: &str) -> Option<f64> {
        self.graph.index_of(node).map(|idx| self.distance[idx])
    }

    /// Station preceding `node` on its shortest path.
    pub fn predecessor(&self, node: &str) -> Option<&'g str> {
        let graph = self.graph;
        let idx = graph.index_of(node)?;
        self.predecessor[idx].map(|p| graph.label(p))
    }

    /// True if `node` exists and has a finite distance.
    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    /// The shortest route from the source to `node`, if one exists.
    pub fn path_to(&self, node: &str) -> Option<Path> {
        let idx = self.graph.index_of(node)?;
        if !self.distance[idx].is_finite() {
            return None;
        }
        Some(reconstruct(self.graph, &self.predecessor, idx))
    }

    /// (station, distance) pairs in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g str, f64)> + '_ {
        let graph = self.graph;
        self.distance
            .iter()
            .enumerate()
            .map(move |(idx, &d)| (graph.label(idx), d))
    }

    /// Number of stations with a finite distance, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_finite()).count()
    }

    /// Queue entries whose neighbours were relaxed. Each reachable station is
    /// expanded exactly once.
    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Queue entries discarded because a shorter distance was already settled.
    pub fn stale_count(&self) -> usize {
        self.stale
    }

    /// Owned distance map keyed by station label.
    pub fn distances(&self) -> DistanceMap {
        self.iter().map(|(n, d)| (n.to_string(), d)).collect()
    }

    /// Owned predecessor map keyed by station label.
    pub fn predecessors(&self) -> PredecessorMap {
        self.predecessor
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                (
                    self.graph.label(idx).to_string(),
                    p.map(|p| self.graph.label(p).to_string()),
                )
            })
            .collect()
    }
}

/// Dijkstra's algorithm from `source`.
///
/// Uses a binary heap with lazy deletion: an improved distance pushes a new
/// entry, and entries whose distance exceeds the recorded best are skipped on
/// pop. O((V + E) log V).
///
/// Fails with `UnsupportedInput` if any edge weight is negative, with
/// `DistanceOverflow` if a path length exceeds `f64::MAX`, and with
/// `NodeNotFound` if `source` is absent.
pub fn shortest_paths<'g>(
    graph: &'g TransitGraph,
    source: &str,
) -> GraphResult<ShortestPaths<'g>> {
    let source_idx = graph.require(source)?;
    if let Some(edge) = graph.negative_edge() {
        return Err(GraphError::UnsupportedInput {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let mut distance = vec![f64::INFINITY; graph.node_count()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.node_count()];
    // First node whose relaxation toward this one overflowed to infinity.
    let mut overflowed_from: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();

    distance[source_idx] = 0.0;
    heap.push(QueueEntry {
        distance: 0.0,
        node: source_idx,
    });

    let mut relaxations = 0usize;
    let mut expanded = 0usize;
    let mut stale = 0usize;
    while let Some(QueueEntry { distance: d, node }) = heap.pop() {
        if d > distance[node] {
            stale += 1;
            trace!(
                "Skipping stale entry for {} ({} > {})",
                graph.label(node),
                d,
                distance[node]
            );
            continue;
        }
        expanded += 1;

        for &(neighbor, weight) in graph.adjacent(node) {
            let alt = d + weight;
            if !alt.is_finite() {
                overflowed_from[neighbor].get_or_insert(node);
                continue;
            }
            if alt < distance[neighbor] {
                distance[neighbor] = alt;
                predecessor[neighbor] = Some(node);
                heap.push(QueueEntry {
                    distance: alt,
                    node: neighbor,
                });
                relaxations += 1;
            }
        }
    }

    // An overflow only matters if it left a reachable station looking unreachable.
    let unreached = overflowed_from
        .iter()
        .enumerate()
        .find(|&(idx, from)| from.is_some() && distance[idx].is_infinite());
    if let Some((to, &Some(from))) = unreached {
        return Err(GraphError::DistanceOverflow {
            from: graph.label(from).to_string(),
            to: graph.label(to).to_string(),
        });
    }

    let result = ShortestPaths {
        graph,
        source: source_idx,
        distance,
        predecessor,
        expanded,
        stale,
    };
    debug!(
        "Dijkstra from {}: {} reachable, {} relaxations, {} stale entries",
        source,
        result.reachable_count(),
        relaxations,
        stale
    );
    Ok(result)
}

/// Run [`shortest_paths`] once from every station, in node order.
///
/// O(V · (V + E) log V). Fine for small networks; large graphs want a
/// dedicated all-pairs algorithm.
pub fn all_pairs_shortest_paths(graph: &TransitGraph) -> GraphResult<Vec<ShortestPaths<'_>>> {
    graph
        .nodes()
        .map(|source| shortest_paths(graph, source))
        .collect()
}
