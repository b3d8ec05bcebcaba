//! CLI entry point for the `wgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use weighted_graph::cli::{commands, graph_from_specs};
use weighted_graph::graph::{BlockedEdge, PathParams};
use weighted_graph::types::NodeId;
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph CLI — directed weighted graphs and shortest simple paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph given on the command line.
#[derive(Args)]
struct GraphArgs {
    /// Edge as U:V or U:V:W (weight defaults to 1.0). Repeatable.
    #[arg(long = "edge", value_name = "U:V[:W]")]
    edges: Vec<String>,
    /// Node with no edges. Repeatable.
    #[arg(long = "node", value_name = "ID", allow_negative_numbers = true)]
    nodes: Vec<NodeId>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration graph
    Demo,
    /// Display node and edge counts for a graph
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// List the neighbors of a node
    Neighbors {
        /// Node ID
        #[arg(allow_negative_numbers = true)]
        node_id: NodeId,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Find the shortest simple path between two nodes
    Path {
        /// Source node ID
        #[arg(allow_negative_numbers = true)]
        source: NodeId,
        /// Target node ID
        #[arg(allow_negative_numbers = true)]
        target: NodeId,
        /// Skip edges into already-visited nodes instead of abandoning the node
        #[arg(long)]
        skip_blocked: bool,
        #[command(flatten)]
        graph: GraphArgs,
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

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Info { graph } => graph_from_specs(&graph.nodes, &graph.edges)
            .and_then(|g| commands::cmd_info(&g, json)),
        Commands::Neighbors { node_id, graph } => graph_from_specs(&graph.nodes, &graph.edges)
            .and_then(|g| commands::cmd_neighbors(&g, node_id, json)),
        Commands::Path {
            source,
            target,
            skip_blocked,
            graph,
        } => {
            let policy = if skip_blocked {
                BlockedEdge::Skip
            } else {
                BlockedEdge::Abort
            };
            let params = PathParams::new(source, target).on_blocked(policy);
            graph_from_specs(&graph.nodes, &graph.edges)
                .and_then(|g| commands::cmd_path(&g, params, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidWeight(_) => 3,
            GraphError::NodeNotFound(_) => 4,
            GraphError::Json(_) => 5,
        };
        process::exit(code);
    }
}
