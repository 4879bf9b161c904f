use crate::error::{PathfinderError, Result};
use crate::graph::types::{Edge, EdgeId, Node, NodeId};

impl super::GraphStore {
    /// Create a node with a fresh id
    pub fn create_node(&self, name: &str) -> Result<Node> {
        let mut state = self.state.write();
        let node = state.prepare_node(name)?;

        self.persist(|db| db.insert_node(&node))?;
        state.insert_node(node.clone());

        tracing::debug!(node_id = node.id, name = %node.name, "created node");
        Ok(node)
    }

    /// Delete a node and, in the same critical section, every edge that
    /// references it. Returns the number of edges removed.
    pub fn delete_node(&self, id: NodeId) -> Result<usize> {
        let mut state = self.state.write();
        if !state.contains_node(id) {
            return Err(PathfinderError::NodeNotFound { id });
        }

        self.persist(|db| db.delete_node_cascade(id))?;
        let removed = state.remove_node_cascade(id)?;

        tracing::debug!(node_id = id, removed_edges = removed.len(), "deleted node");
        Ok(removed.len())
    }

    /// Create a directed edge with a fresh id
    pub fn create_edge(&self, src_id: NodeId, dst_id: NodeId, weight: f64) -> Result<Edge> {
        let mut state = self.state.write();
        let edge = state.prepare_edge(
            src_id,
            dst_id,
            weight,
            self.config.graph.reject_self_loops,
        )?;

        self.persist(|db| db.insert_edge(&edge))?;
        state.insert_edge(edge.clone());

        tracing::debug!(
            edge_id = edge.id,
            src_id,
            dst_id,
            weight,
            "created edge"
        );
        Ok(edge)
    }

    pub fn delete_edge(&self, id: EdgeId) -> Result<()> {
        let mut state = self.state.write();
        if state.edge(id).is_none() {
            return Err(PathfinderError::EdgeNotFound { id });
        }

        self.persist(|db| db.delete_edge(id))?;
        state.remove_edge(id)?;

        tracing::debug!(edge_id = id, "deleted edge");
        Ok(())
    }
}
