//! CLI argument parsing for pathfinder
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, plus
//! logging and traversal deadline controls.

pub mod graph;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pathfinder_core::graph::NodeId;
pub use graph::{EdgeCommands, NodeCommands};
pub use pathfinder_core::format::OutputFormat;
use parse::parse_output_format;

/// Pathfinder - directed weighted graph store with BFS and shortest paths
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true, env = "PATHFINDER_STORE")]
    pub store: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (error, warn, info, debug, trace) or directives
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Abort a traversal after this many milliseconds (0 disables)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new pathfinder store
    Init {
        /// Reject edges from a node to itself
        #[arg(long)]
        reject_self_loops: bool,
    },

    /// Manage nodes
    Node {
        #[command(subcommand)]
        command: NodeCommands,
    },

    /// Manage edges
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },

    /// Breadth-first traversal along outgoing edges
    Bfs {
        /// Start node ID
        start: NodeId,
    },

    /// Least-cost path between two nodes (Dijkstra)
    Path {
        /// Source node ID
        src: NodeId,

        /// Destination node ID
        dst: NodeId,
    },

    /// Import nodes and edges from CSV files
    Seed {
        /// Node CSV with a `name` column (default from config)
        #[arg(long)]
        nodes: Option<PathBuf>,

        /// Edge CSV with `src_name,dst_name,weight` columns (default from config)
        #[arg(long)]
        edges: Option<PathBuf>,
    },

    /// Show node and edge counts
    Stats,
}
