use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned node identifier
pub type NodeId = i64;

/// Store-assigned edge identifier
pub type EdgeId = i64;

/// A named vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub created: DateTime<Utc>,
}

/// A directed, weighted connection from `src_id` to `dst_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub src_id: NodeId,
    pub dst_id: NodeId,
    pub weight: f64,
    pub created: DateTime<Utc>,
}

/// One node of the BFS spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BfsTreeEntry {
    pub node_id: NodeId,
    /// Node that first discovered this one; `None` for the start node
    pub parent_id: Option<NodeId>,
    pub depth: u32,
}

/// Breadth-first traversal result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    /// Node ids in discovery order, starting with the start node
    pub order: Vec<NodeId>,
    /// Spanning tree entries, listed in the same order as `order`
    pub tree: Vec<BfsTreeEntry>,
}

impl BfsResult {
    /// Look up the tree entry for a visited node
    pub fn entry(&self, node_id: NodeId) -> Option<&BfsTreeEntry> {
        self.tree.iter().find(|e| e.node_id == node_id)
    }
}

/// Least-cost route between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Node ids from source to destination, both inclusive
    pub path: Vec<NodeId>,
    /// Sum of traversed edge weights
    pub distance: f64,
}

impl ShortestPath {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Node and edge counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}
