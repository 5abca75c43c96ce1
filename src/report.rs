//! Markdown reports for statistics, traversal paths and shortest distances.

use crate::engine::{GraphStats, ShortestPaths};
use crate::types::Path;

/// Render a distance: integral values without a fraction, `unreachable` for infinity.
pub fn format_distance(d: f64) -> String {
    if !d.is_finite() {
        "unreachable".to_string()
    } else if d.fract() == 0.0 {
        format!("{}", d)
    } else {
        format!("{:.2}", d)
    }
}

/// Render an optional path as `A -> B -> C`, or `no path`.
pub fn format_path(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.to_string(),
        None => "no path".to_string(),
    }
}

/// Network overview: counts, per-station degree, average degree, isolated stations.
pub fn render_network_report(stats: &GraphStats) -> String {
    let mut lines = vec![
        "# Transit network".to_string(),
        String::new(),
        "Stations are vertices, direct connections are edges.".to_string(),
        String::new(),
        "## Characteristics".to_string(),
        format!("- Stations: **{}**", stats.node_count),
        format!("- Connections: **{}**", stats.edge_count),
        "- Degree per station:".to_string(),
    ];
    for (node, degree) in &stats.degrees {
        lines.push(format!("  - {}: {}", node, degree));
    }
    lines.push(format!("- Average degree: **{:.2}**", stats.average_degree));
    let isolated = if stats.isolated.is_empty() {
        "none".to_string()
    } else {
        stats.isolated.join(", ")
    };
    lines.push(format!("- Isolated stations: **{}**", isolated));
    lines.push(String::new());
    lines.push("## Summary".to_string());
    if stats.isolated.is_empty() {
        lines.push("Every station has at least one connection.".to_string());
    } else {
        lines.push(format!("{} station(s) have no connection.", stats.isolated.len()));
    }
    lines.join("\n")
}

/// DFS vs BFS comparison for one start/goal pair.
pub fn render_path_report(
    start: &str,
    goal: &str,
    dfs: Option<&Path>,
    bfs: Option<&Path>,
) -> String {
    let mut lines = vec![
        "# DFS vs BFS".to_string(),
        String::new(),
        format!("## Path between {} and {}", start, goal),
        String::new(),
        format!("- DFS path: `{}`", format_path(dfs)),
        format!("- BFS path: `{}`", format_path(bfs)),
    ];
    if let (Some(d), Some(b)) = (dfs, bfs) {
        lines.push(format!("- Edges: DFS {}, BFS {}", d.edge_count(), b.edge_count()));
    }
    lines.extend([
        String::new(),
        "## Notes".to_string(),
        "- **DFS** follows each branch to its end before backtracking; the path it returns depends on neighbour order.".to_string(),
        "- **BFS** expands level by level and returns a path with the fewest edges.".to_string(),
    ]);
    lines.join("\n")
}

/// Shortest distances from every source, one section per source.
pub fn render_distance_report(all_pairs: &[ShortestPaths<'_>]) -> String {
    let mut lines = vec![
        "# Dijkstra shortest paths".to_string(),
        String::new(),
        "## Shortest distances between all stations".to_string(),
        String::new(),
    ];
    for paths in all_pairs {
        lines.push(format!("### From {}", paths.source()));
        for (target, d) in paths.iter() {
            lines.push(format!("- to {}: {}", target, format_distance(d)));
        }
        lines.push(String::new());
    }
    lines.push("## Summary".to_string());
    lines.push("Distances are sums of edge weights along the cheapest route.".to_string());
    lines.join("\n")
}
