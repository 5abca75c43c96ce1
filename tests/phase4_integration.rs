//! Phase 4 tests: network descriptions, reports, CLI commands end to end.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use transit_graph::cli::commands::{
    cmd_report, load_network, NETWORK_REPORT, PATHS_REPORT, SHORTEST_PATHS_REPORT,
};
use transit_graph::engine::{all_pairs_shortest_paths, analyze, shortest_paths};
use transit_graph::graph::{bfs_path, dfs_path};
use transit_graph::network::NetworkSpec;
use transit_graph::report::{
    format_distance, format_path, render_distance_report, render_network_report,
    render_path_report,
};
use transit_graph::types::GraphError;

// ==================== Helper ====================

const LOOP_LINE: &str = r#"{
    "stations": ["North", "East", "South", "West", "Yard"],
    "connections": [
        { "from": "North", "to": "East", "weight": 2.5 },
        { "from": "East", "to": "South", "weight": 1 },
        { "from": "South", "to": "West" },
        { "from": "West", "to": "North", "weight": 4 }
    ]
}"#;

fn write_network(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Network Description ====================

#[test]
fn test_parse_network_json() {
    let spec = NetworkSpec::from_json_str(LOOP_LINE).unwrap();
    assert_eq!(spec.stations.len(), 5);
    assert_eq!(spec.connections[2].weight, None);

    let graph = spec.build(true).unwrap();
    assert_eq!(graph.weight("North", "East"), Some(2.5));
    assert_eq!(graph.weight("South", "West"), Some(1.0));
    assert_eq!(graph.degree("Yard").unwrap(), 0);
}

#[test]
fn test_load_network_file() {
    let file = write_network(LOOP_LINE);
    let spec = load_network(Some(file.path())).unwrap();
    let graph = spec.build(true).unwrap();

    let paths = shortest_paths(&graph, "North").unwrap();
    assert_eq!(paths.distance("South"), Some(3.5));
    assert_eq!(paths.distance("West"), Some(4.0));
    assert_eq!(paths.distance("Yard"), Some(f64::INFINITY));
}

#[test]
fn test_default_network_is_transit() {
    let spec = load_network(None).unwrap();
    assert_eq!(spec, NetworkSpec::transit());
}

#[test]
fn test_network_roundtrips_through_json() {
    let spec = NetworkSpec::transit();
    let text = serde_json::to_string(&spec).unwrap();
    assert_eq!(NetworkSpec::from_json_str(&text).unwrap(), spec);
}

#[test]
fn test_malformed_network_rejected() {
    assert!(matches!(
        NetworkSpec::from_json_str("{ \"stations\": 3 }"),
        Err(GraphError::Json(_))
    ));

    let dangling = r#"{ "stations": ["A"], "connections": [{ "from": "A", "to": "B" }] }"#;
    let spec = NetworkSpec::from_json_str(dangling).unwrap();
    assert!(matches!(spec.build(false), Err(GraphError::InvalidEdge { .. })));
}

#[test]
fn test_missing_network_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        load_network(Some(&missing)),
        Err(GraphError::Io(_))
    ));
}

// ==================== Reports ====================

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(20.0), "20");
    assert_eq!(format_distance(3.5), "3.50");
    assert_eq!(format_distance(f64::INFINITY), "unreachable");
    assert_eq!(format_distance(0.0), "0");
    assert_eq!(format_distance(1e20), "100000000000000000000");
    assert_eq!(format_distance(9_007_199_254_740_992.0), "9007199254740992");
    assert_eq!(format_path(None), "no path");
}

#[test]
fn test_network_report() {
    let graph = NetworkSpec::transit().build(false).unwrap();
    let report = render_network_report(&analyze(&graph));
    assert!(report.starts_with("# Transit network"));
    assert!(report.contains("- Stations: **7**"));
    assert!(report.contains("- Connections: **7**"));
    assert!(report.contains("  - Central: 2"));
    assert!(report.contains("- Average degree: **2.00**"));
    assert!(report.contains("- Isolated stations: **none**"));
}

#[test]
fn test_path_report() {
    let graph = NetworkSpec::transit().build(false).unwrap();
    let dfs = dfs_path(&graph, "Central", "Airport").unwrap();
    let bfs = bfs_path(&graph, "Central", "Airport").unwrap();
    let report = render_path_report("Central", "Airport", dfs.as_ref(), bfs.as_ref());
    assert!(report.contains("- DFS path: `Central -> Parkside -> Riverside -> Harbor -> Airport`"));
    assert!(report.contains("- BFS path: `Central -> Museum -> University -> Airport`"));
    assert!(report.contains("- Edges: DFS 4, BFS 3"));

    let none = render_path_report("A", "B", None, None);
    assert!(none.contains("- DFS path: `no path`"));
    assert!(!none.contains("- Edges:"));
}

#[test]
fn test_distance_report() {
    let mut graph = NetworkSpec::transit().build(true).unwrap();
    graph.add_node("Depot");
    let all = all_pairs_shortest_paths(&graph).unwrap();
    let report = render_distance_report(&all);
    assert!(report.contains("### From Central"));
    assert!(report.contains("- to Airport: 20"));
    assert!(report.contains("- to Depot: unreachable"));
    assert!(report.contains("### From Depot"));
    assert_eq!(report.matches("### From").count(), 8);
}

// ==================== Commands ====================

#[test]
fn test_cmd_report_writes_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports");
    cmd_report(None, &out, "Central", "Airport").unwrap();

    let network = std::fs::read_to_string(out.join(NETWORK_REPORT)).unwrap();
    let paths = std::fs::read_to_string(out.join(PATHS_REPORT)).unwrap();
    let shortest = std::fs::read_to_string(out.join(SHORTEST_PATHS_REPORT)).unwrap();

    assert!(network.contains("- Stations: **7**"));
    assert!(paths.contains("## Path between Central and Airport"));
    assert!(shortest.contains("- to Airport: 20"));
}

#[test]
fn test_cmd_report_unknown_station() {
    let dir = TempDir::new().unwrap();
    let result = cmd_report(None, dir.path(), "Central", "Moon");
    assert!(matches!(result, Err(GraphError::NodeNotFound(n)) if n == "Moon"));
}

#[test]
fn test_cmd_report_negative_weight_writes_nothing() {
    let file = write_network(
        r#"{ "stations": ["A", "B"], "connections": [{ "from": "A", "to": "B", "weight": -1 }] }"#,
    );
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reports");

    let result = cmd_report(Some(file.path()), &out, "A", "B");
    assert!(matches!(result, Err(GraphError::UnsupportedInput { .. })));
    for name in [NETWORK_REPORT, PATHS_REPORT, SHORTEST_PATHS_REPORT] {
        assert!(!out.join(name).exists(), "{name} written before failure");
    }
    assert!(!out.exists());
}

#[test]
fn test_cmd_report_with_network_file() {
    let file = write_network(LOOP_LINE);
    let dir = TempDir::new().unwrap();
    cmd_report(Some(file.path()), dir.path(), "North", "Yard").unwrap();

    let paths = std::fs::read_to_string(dir.path().join(PATHS_REPORT)).unwrap();
    assert!(paths.contains("- BFS path: `no path`"));
    let network = std::fs::read_to_string(dir.path().join(NETWORK_REPORT)).unwrap();
    assert!(network.contains("- Isolated stations: **Yard**"));
}
