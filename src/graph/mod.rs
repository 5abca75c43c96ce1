//! In-memory graph store and unweighted traversal.

pub mod builder;
pub mod transit_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use transit_graph::TransitGraph;
pub use traversal::{bfs_path, dfs_path, find_path, SearchStrategy};
