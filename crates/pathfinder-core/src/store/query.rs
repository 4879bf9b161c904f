use crate::error::Result;
use crate::graph::snapshot::GraphSnapshot;
use crate::graph::types::{Edge, EdgeId, GraphStats, Node, NodeId};

impl super::GraphStore {
    /// All live nodes in ascending id (creation) order
    pub fn list_nodes(&self) -> Vec<Node> {
        self.state.read().nodes().cloned().collect()
    }

    /// All live edges in ascending id order
    pub fn list_edges(&self) -> Vec<Edge> {
        self.state.read().edges().cloned().collect()
    }

    pub fn get_node(&self, id: NodeId) -> Option<Node> {
        self.state.read().node(id).cloned()
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.state.read().edge(id).cloned()
    }

    /// Outgoing edges of `id` in ascending edge id order
    pub fn outbound_edges(&self, id: NodeId) -> Vec<Edge> {
        self.state
            .read()
            .edges()
            .filter(|e| e.src_id == id)
            .cloned()
            .collect()
    }

    /// Lowest-id node with exactly this name
    pub fn find_node_by_name(&self, name: &str) -> Option<Node> {
        self.state.read().nodes().find(|n| n.name == name).cloned()
    }

    /// Whether at least one edge runs from `src_id` to `dst_id`
    pub fn has_edge_between(&self, src_id: NodeId, dst_id: NodeId) -> bool {
        self.state
            .read()
            .edges()
            .any(|e| e.src_id == src_id && e.dst_id == dst_id)
    }

    pub fn stats(&self) -> GraphStats {
        self.state.read().stats()
    }

    /// Consistent copy of the graph for one algorithm run
    pub fn snapshot(&self) -> GraphSnapshot {
        let state = self.state.read();
        GraphSnapshot::new(state.nodes(), state.edges())
    }

    /// Compare in-memory counts with the database. Volatile stores are
    /// always consistent.
    pub fn verify(&self) -> Result<bool> {
        let state = self.state.read();
        let stats = state.stats();
        let db = self.db.lock();
        match db.as_ref() {
            Some(db) => Ok(db.get_node_count()? == stats.nodes as i64
                && db.get_edge_count()? == stats.edges as i64),
            None => Ok(true),
        }
    }
}
