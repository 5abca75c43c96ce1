//! CLI entry point for the `transit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use transit_graph::cli::commands;
use transit_graph::graph::SearchStrategy;
use transit_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "transit",
    about = "Transit network analysis: statistics, DFS/BFS paths, Dijkstra distances"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// JSON network description (defaults to the built-in transit network)
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Node/edge counts, degrees and isolated stations
    Stats,
    /// Find a path between two stations, ignoring weights
    Path {
        /// Start station
        start: String,
        /// Goal station
        goal: String,
        /// Strategy: dfs, bfs, or both
        #[arg(long, default_value = "both")]
        strategy: String,
    },
    /// Weighted shortest distances (Dijkstra)
    Shortest {
        /// Source station
        source: Option<String>,
        /// Compute from every station
        #[arg(long, conflicts_with = "source")]
        all: bool,
    },
    /// Write Markdown reports for the network
    Report {
        /// Directory to write reports into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Start station for the path report
        #[arg(long, default_value = "Central")]
        start: String,
        /// Goal station for the path report
        #[arg(long, default_value = "Airport")]
        goal: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let network = cli.network.as_deref();
    let result = match cli.command {
        Commands::Stats => commands::cmd_stats(network, json),
        Commands::Path {
            start,
            goal,
            strategy,
        } => {
            let strategies = match strategy.as_str() {
                "both" => vec![SearchStrategy::DepthFirst, SearchStrategy::BreadthFirst],
                other => match SearchStrategy::from_name(other) {
                    Some(s) => vec![s],
                    None => {
                        eprintln!("Invalid strategy: {}", other);
                        process::exit(3);
                    }
                },
            };
            commands::cmd_path(network, &start, &goal, &strategies, json)
        }
        Commands::Shortest { source, all } => {
            if source.is_none() && !all {
                eprintln!("Give a source station or --all");
                process::exit(3);
            }
            commands::cmd_shortest(network, source.as_deref(), json)
        }
        Commands::Report {
            out_dir,
            start,
            goal,
        } => commands::cmd_report(network, &out_dir, &start, &goal),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::InvalidEdge { .. }
            | GraphError::SelfLoop(_)
            | GraphError::InvalidWeight { .. } => 2,
            GraphError::NodeNotFound(_) => 4,
            GraphError::UnsupportedInput { .. } | GraphError::DistanceOverflow { .. } => 5,
        };
        process::exit(code);
    }
}
