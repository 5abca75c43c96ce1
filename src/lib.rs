//! Transit graph — stations and connections with path finding.
//!
//! Builds an undirected graph of named stations, finds routes between two
//! stations with depth-first or breadth-first search, and computes weighted
//! single-source shortest paths with Dijkstra's algorithm.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod network;
pub mod report;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    all_pairs_shortest_paths, analyze, shortest_paths, DistanceMap, GraphStats, PredecessorMap,
    ShortestPaths,
};
pub use graph::{bfs_path, dfs_path, find_path, GraphBuilder, SearchStrategy, TransitGraph};
pub use network::{ConnectionSpec, NetworkSpec};
pub use types::{Edge, GraphError, GraphResult, Path, DEFAULT_WEIGHT};
