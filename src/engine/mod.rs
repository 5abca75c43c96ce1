//! Weighted shortest paths and graph statistics.

pub mod analysis;
pub mod shortest_path;

pub use analysis::{analyze, GraphStats};
pub use shortest_path::{
    all_pairs_shortest_paths, shortest_paths, DistanceMap, PredecessorMap, ShortestPaths,
};
