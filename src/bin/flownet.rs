//! CLI entry point for the `flownet` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use flownet::cli::commands;
use flownet::cli::EdgeSpec;
use flownet::FlowError;

#[derive(Parser)]
#[command(
    name = "flownet",
    about = "flownet CLI: cycle detection and maximum flow over directed graphs"
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

#[derive(Subcommand)]
enum Commands {
    /// Show counts, degrees, sources, sinks and cyclicity
    Info {
        /// Edges as TAIL:HEAD[:CAPACITY[:FLOW]]
        #[arg(required = true)]
        edges: Vec<EdgeSpec>,
    },
    /// Report whether the graph contains a cycle
    Cyclic {
        /// Edges as TAIL:HEAD[:CAPACITY[:FLOW]]
        #[arg(required = true)]
        edges: Vec<EdgeSpec>,
    },
    /// Print the residual graph of the given flow assignment
    Residual {
        /// Edges as TAIL:HEAD[:CAPACITY[:FLOW]]
        #[arg(required = true)]
        edges: Vec<EdgeSpec>,
    },
    /// Compute the maximum flow with Edmonds-Karp
    MaxFlow {
        /// Edges as TAIL:HEAD[:CAPACITY[:FLOW]]
        #[arg(required = true)]
        edges: Vec<EdgeSpec>,
        /// Source vertex (defaults to the lowest-ID vertex with indegree 0 and outgoing edges)
        #[arg(long)]
        source: Option<u64>,
        /// Sink vertex (defaults to the lowest-ID vertex with outdegree 0 and incoming edges)
        #[arg(long)]
        sink: Option<u64>,
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
        Commands::Info { edges } => commands::cmd_info(&edges, json),
        Commands::Cyclic { edges } => commands::cmd_cyclic(&edges, json),
        Commands::Residual { edges } => commands::cmd_residual(&edges, json),
        Commands::MaxFlow {
            edges,
            source,
            sink,
        } => commands::cmd_max_flow(&edges, source, sink, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            FlowError::InvalidEdgeSpec(_)
            | FlowError::NegativeCapacity { .. }
            | FlowError::NegativeFlow { .. }
            | FlowError::CapacityOverflow => 3,
            FlowError::NoSource
            | FlowError::NoSink
            | FlowError::SameTerminal(_)
            | FlowError::VertexNotFound(_)
            | FlowError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
