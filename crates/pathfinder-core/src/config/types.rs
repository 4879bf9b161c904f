//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph integrity policy
    #[serde(default)]
    pub graph: GraphConfig,

    /// Traversal limits
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Seed data locations
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            graph: GraphConfig::default(),
            traversal: TraversalConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

/// Graph integrity policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Reject edges whose source and destination are the same node
    #[serde(default)]
    pub reject_self_loops: bool,
}

/// Traversal limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Deadline for a single BFS or shortest-path run in milliseconds (0 = none)
    #[serde(default)]
    pub timeout_ms: u64,
}

/// Seed data locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_nodes_file")]
    pub nodes_file: String,

    #[serde(default = "default_edges_file")]
    pub edges_file: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            nodes_file: default_nodes_file(),
            edges_file: default_edges_file(),
        }
    }
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_nodes_file() -> String {
    "data/nodes.csv".to_string()
}

fn default_edges_file() -> String {
    "data/edges.csv".to_string()
}
