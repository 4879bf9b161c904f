//! Node and edge subcommands

use clap::Subcommand;
use pathfinder_core::graph::{EdgeId, NodeId};

/// Node subcommands
#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// List all nodes in creation order
    List,

    /// Show a single node
    Show {
        /// Node ID
        id: NodeId,
    },

    /// Create a node
    Create {
        /// Node name (surrounding whitespace is trimmed)
        name: String,
    },

    /// Delete a node and every edge that touches it
    Delete {
        /// Node ID
        id: NodeId,
    },
}

/// Edge subcommands
#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// List all edges in creation order
    List {
        /// Only edges leaving this node
        #[arg(long)]
        from: Option<NodeId>,
    },

    /// Show a single edge
    Show {
        /// Edge ID
        id: EdgeId,
    },

    /// Create a directed edge
    Create {
        /// Source node ID
        src: NodeId,

        /// Destination node ID
        dst: NodeId,

        /// Non-negative traversal cost
        #[arg(allow_hyphen_values = true)]
        weight: String,
    },

    /// Delete an edge
    Delete {
        /// Edge ID
        id: EdgeId,
    },
}
