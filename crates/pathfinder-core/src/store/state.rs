//! In-memory node and edge collections
//!
//! Mutations are split into a validating `prepare_*` step that never
//! changes state and an infallible apply step, so callers can persist the
//! prepared value in between and abandon it on failure.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::bail_invalid;
use crate::error::{PathfinderError, Result};
use crate::graph::types::{Edge, EdgeId, GraphStats, Node, NodeId};

#[derive(Debug, Clone)]
pub struct GraphState {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
}

impl Default for GraphState {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_node_id: 1,
            next_edge_id: 1,
        }
    }
}

impl GraphState {
    /// Rebuild state from persisted rows, checking referential integrity
    pub fn from_parts(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        next_node_id: NodeId,
        next_edge_id: EdgeId,
    ) -> Result<Self> {
        let mut state = GraphState::default();

        for node in nodes {
            state.next_node_id = state.next_node_id.max(node.id + 1);
            state.nodes.insert(node.id, node);
        }

        for edge in edges {
            if !state.contains_node(edge.src_id) || !state.contains_node(edge.dst_id) {
                return Err(PathfinderError::InvalidStore {
                    reason: format!(
                        "edge {} references missing node ({} -> {})",
                        edge.id, edge.src_id, edge.dst_id
                    ),
                });
            }
            state.next_edge_id = state.next_edge_id.max(edge.id + 1);
            state.edges.insert(edge.id, edge);
        }

        // Persisted counters may be ahead of the surviving rows
        state.next_node_id = state.next_node_id.max(next_node_id);
        state.next_edge_id = state.next_edge_id.max(next_edge_id);

        Ok(state)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn next_node_id(&self) -> NodeId {
        self.next_node_id
    }

    pub fn next_edge_id(&self) -> EdgeId {
        self.next_edge_id
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
        }
    }

    /// Validate `name` and build the node that `insert_node` would add
    pub fn prepare_node(&self, name: &str) -> Result<Node> {
        let name = name.trim();
        if name.is_empty() {
            bail_invalid!("node name must not be empty");
        }

        Ok(Node {
            id: self.next_node_id,
            name: name.to_string(),
            created: Utc::now(),
        })
    }

    pub fn insert_node(&mut self, node: Node) {
        self.next_node_id = self.next_node_id.max(node.id + 1);
        self.nodes.insert(node.id, node);
    }

    /// Validate endpoints and weight and build the edge that `insert_edge`
    /// would add
    pub fn prepare_edge(
        &self,
        src_id: NodeId,
        dst_id: NodeId,
        weight: f64,
        reject_self_loops: bool,
    ) -> Result<Edge> {
        for id in [src_id, dst_id] {
            if !self.contains_node(id) {
                return Err(PathfinderError::NodeNotFound { id });
            }
        }
        if !weight.is_finite() {
            bail_invalid!("edge weight must be a finite number, got {}", weight);
        }
        if weight < 0.0 {
            bail_invalid!("edge weight must be >= 0, got {}", weight);
        }
        if reject_self_loops && src_id == dst_id {
            bail_invalid!("self-loop on node {} is not allowed", src_id);
        }

        Ok(Edge {
            id: self.next_edge_id,
            src_id,
            dst_id,
            weight,
            created: Utc::now(),
        })
    }

    pub fn insert_edge(&mut self, edge: Edge) {
        self.next_edge_id = self.next_edge_id.max(edge.id + 1);
        self.edges.insert(edge.id, edge);
    }

    /// Ids of every edge with `id` as source or destination
    pub fn edges_touching(&self, id: NodeId) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|e| e.src_id == id || e.dst_id == id)
            .map(|e| e.id)
            .collect()
    }

    /// Remove a node together with every edge that references it
    pub fn remove_node_cascade(&mut self, id: NodeId) -> Result<Vec<Edge>> {
        if !self.contains_node(id) {
            return Err(PathfinderError::NodeNotFound { id });
        }

        let removed: Vec<Edge> = self
            .edges_touching(id)
            .into_iter()
            .filter_map(|edge_id| self.edges.remove(&edge_id))
            .collect();
        self.nodes.remove(&id);

        Ok(removed)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        self.edges
            .remove(&id)
            .ok_or(PathfinderError::EdgeNotFound { id })
    }
}
