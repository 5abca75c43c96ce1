//! Graph traversal algorithms (DFS, BFS) for start-to-goal path finding.

use std::collections::VecDeque;

use log::debug;

use crate::types::{GraphResult, Path};

use super::TransitGraph;

/// Which traversal to use when looking for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Follow one branch to the end before backtracking. Any path.
    DepthFirst,
    /// Expand level by level. Fewest edges.
    BreadthFirst,
}

impl SearchStrategy {
    /// Short name used on the command line and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Find a path with the given strategy.
pub fn find_path(
    graph: &TransitGraph,
    start: &str,
    goal: &str,
    strategy: SearchStrategy,
) -> GraphResult<Option<Path>> {
    match strategy {
        SearchStrategy::DepthFirst => dfs_path(graph, start, goal),
        SearchStrategy::BreadthFirst => bfs_path(graph, start, goal),
    }
}

/// Depth-first search from `start` to `goal`.
///
/// Neighbours are explored in adjacency insertion order, so the returned path
/// is the first one that order reaches, not necessarily the shortest. Each
/// stack frame keeps a cursor into its node's adjacency list, which gives the
/// same visiting order as the recursive formulation.
///
/// Returns `Ok(None)` if `goal` is unreachable and `NodeNotFound` if either
/// endpoint is absent.
pub fn dfs_path(graph: &TransitGraph, start: &str, goal: &str) -> GraphResult<Option<Path>> {
    let start_idx = graph.require(start)?;
    let goal_idx = graph.require(goal)?;

    let mut visited = vec![false; graph.node_count()];
    // (node, index of the next neighbour to try)
    let mut stack: Vec<(usize, usize)> = vec![(start_idx, 0)];
    visited[start_idx] = true;

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        if current == goal_idx {
            let nodes = stack
                .iter()
                .map(|&(n, _)| graph.label(n).to_string())
                .collect();
            debug!("DFS {} -> {}: found path of {} nodes", start, goal, stack.len());
            return Ok(Some(Path::from_nodes(nodes)));
        }

        match graph.adjacent(current).get(cursor) {
            Some(&(neighbor, _)) => {
                frame.1 += 1;
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("DFS {} -> {}: unreachable", start, goal);
    Ok(None)
}

/// Breadth-first search from `start` to `goal`.
///
/// Nodes are marked visited when enqueued, so each is processed at most once.
/// The returned path has the minimum number of edges.
///
/// Returns `Ok(None)` if `goal` is unreachable and `NodeNotFound` if either
/// endpoint is absent.
pub fn bfs_path(graph: &TransitGraph, start: &str, goal: &str) -> GraphResult<Option<Path>> {
    let start_idx = graph.require(start)?;
    let goal_idx = graph.require(goal)?;

    let mut visited = vec![false; graph.node_count()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        if current == goal_idx {
            let path = reconstruct(graph, &predecessor, goal_idx);
            debug!("BFS {} -> {}: found path of {} nodes", start, goal, path.len());
            return Ok(Some(path));
        }

        for &(neighbor, _) in graph.adjacent(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessor[neighbor] = Some(current);
            queue.push_back(neighbor);
        }
    }

    debug!("BFS {} -> {}: unreachable", start, goal);
    Ok(None)
}

/// Walk a predecessor table back from `target` and return the forward path.
pub(crate) fn reconstruct(
    graph: &TransitGraph,
    predecessor: &[Option<usize>],
    target: usize,
) -> Path {
    let mut nodes = vec![graph.label(target).to_string()];
    let mut current = target;
    while let Some(prev) = predecessor[current] {
        nodes.push(graph.label(prev).to_string());
        current = prev;
    }
    nodes.reverse();
    Path::from_nodes(nodes)
}
