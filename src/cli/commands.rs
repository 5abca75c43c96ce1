//! CLI command implementations.

use std::path::Path;

use log::info;

use crate::engine::{all_pairs_shortest_paths, analyze, shortest_paths};
use crate::graph::{find_path, SearchStrategy};
use crate::network::NetworkSpec;
use crate::report::{
    format_distance, format_path, render_distance_report, render_network_report,
    render_path_report,
};
use crate::types::GraphResult;

/// File names written by `cmd_report`.
pub const NETWORK_REPORT: &str = "network.md";
pub const PATHS_REPORT: &str = "paths.md";
pub const SHORTEST_PATHS_REPORT: &str = "shortest_paths.md";

/// Load the network description from `path`, or the built-in transit network.
pub fn load_network(path: Option<&Path>) -> GraphResult<NetworkSpec> {
    match path {
        Some(p) => NetworkSpec::load(p),
        None => Ok(NetworkSpec::transit()),
    }
}

/// Print descriptive statistics.
pub fn cmd_stats(network: Option<&Path>, json: bool) -> GraphResult<()> {
    let graph = load_network(network)?.build(false)?;
    let stats = analyze(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Stations: {}", stats.node_count);
        println!("Connections: {}", stats.edge_count);
        println!("Degrees:");
        for (node, degree) in &stats.degrees {
            println!("  {}: {}", node, degree);
        }
        println!("Average degree: {:.2}", stats.average_degree);
        if stats.isolated.is_empty() {
            println!("Isolated: none");
        } else {
            println!("Isolated: {}", stats.isolated.join(", "));
        }
    }
    Ok(())
}

/// Find paths between two stations with each requested strategy.
pub fn cmd_path(
    network: Option<&Path>,
    start: &str,
    goal: &str,
    strategies: &[SearchStrategy],
    json: bool,
) -> GraphResult<()> {
    let graph = load_network(network)?.build(false)?;

    let mut results = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        results.push((strategy, find_path(&graph, start, goal, strategy)?));
    }

    if json {
        let out: Vec<serde_json::Value> = results
            .iter()
            .map(|(strategy, path)| {
                serde_json::json!({
                    "strategy": strategy.name(),
                    "start": start,
                    "goal": goal,
                    "path": path,
                    "edges": path.as_ref().map(|p| p.edge_count()),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for (strategy, path) in &results {
            println!(
                "{} path: {}",
                strategy.name().to_uppercase(),
                format_path(path.as_ref())
            );
        }
    }
    Ok(())
}

/// Weighted shortest distances from one source, or from every station.
pub fn cmd_shortest(network: Option<&Path>, source: Option<&str>, json: bool) -> GraphResult<()> {
    let graph = load_network(network)?.build(true)?;

    let all = match source {
        Some(s) => vec![shortest_paths(&graph, s)?],
        None => all_pairs_shortest_paths(&graph)?,
    };

    if json {
        let out: Vec<serde_json::Value> = all
            .iter()
            .map(|paths| {
                let targets: Vec<serde_json::Value> = paths
                    .iter()
                    .map(|(target, d)| {
                        serde_json::json!({
                            "target": target,
                            "distance": d.is_finite().then_some(d),
                            "predecessor": paths.predecessor(target),
                            "path": paths.path_to(target),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "source": paths.source(),
                    "targets": targets,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for paths in &all {
            println!("From {}:", paths.source());
            for (target, d) in paths.iter() {
                match paths.path_to(target) {
                    Some(route) if source.is_some() => {
                        println!("  {}: {} via {}", target, format_distance(d), route)
                    }
                    _ => println!("  {}: {}", target, format_distance(d)),
                }
            }
        }
    }
    Ok(())
}

/// Write the three Markdown reports into `out_dir`.
pub fn cmd_report(
    network: Option<&Path>,
    out_dir: &Path,
    start: &str,
    goal: &str,
) -> GraphResult<()> {
    let spec = load_network(network)?;
    let graph = spec.build(false)?;
    let weighted = spec.build(true)?;

    // Every query runs before the first write, so a failure leaves no partial output.
    let stats = analyze(&graph);
    let dfs = find_path(&graph, start, goal, SearchStrategy::DepthFirst)?;
    let bfs = find_path(&graph, start, goal, SearchStrategy::BreadthFirst)?;
    let all = all_pairs_shortest_paths(&weighted)?;

    let reports = [
        (NETWORK_REPORT, render_network_report(&stats)),
        (
            PATHS_REPORT,
            render_path_report(start, goal, dfs.as_ref(), bfs.as_ref()),
        ),
        (SHORTEST_PATHS_REPORT, render_distance_report(&all)),
    ];

    std::fs::create_dir_all(out_dir)?;
    for (name, body) in &reports {
        let path = out_dir.join(name);
        std::fs::write(&path, body)?;
        println!("Report generated: {}", path.display());
    }

    info!("Reports written to {}", out_dir.display());
    Ok(())
}
