//! Point-in-time copy of the graph used by one algorithm run

use std::collections::{BTreeSet, HashMap};

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, Node, NodeId};

/// Immutable view of nodes and outgoing adjacency.
///
/// Built while the store's read lock is held, so it never contains an
/// edge whose endpoint has been deleted.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    nodes: BTreeSet<NodeId>,
    outbound: HashMap<NodeId, Vec<Edge>>,
    edge_count: usize,
}

impl GraphSnapshot {
    /// Build a snapshot from node and edge collections.
    ///
    /// Edges are grouped by source and each group is sorted by edge id,
    /// which fixes the neighbor scan order for every traversal.
    pub fn new<'a>(
        nodes: impl IntoIterator<Item = &'a Node>,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Self {
        let nodes: BTreeSet<NodeId> = nodes.into_iter().map(|n| n.id).collect();
        let mut outbound: HashMap<NodeId, Vec<Edge>> = HashMap::new();
        let mut edge_count = 0;

        for edge in edges {
            outbound.entry(edge.src_id).or_default().push(edge.clone());
            edge_count += 1;
        }

        for list in outbound.values_mut() {
            list.sort_by_key(|e| e.id);
        }

        Self {
            nodes,
            outbound,
            edge_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl GraphProvider for GraphSnapshot {
    fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    fn outbound_edges(&self, id: NodeId) -> &[Edge] {
        self.outbound.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn node(id: NodeId) -> Node {
        Node {
            id,
            name: format!("n{}", id),
            created: Utc::now(),
        }
    }

    fn edge(id: i64, src_id: NodeId, dst_id: NodeId) -> Edge {
        Edge {
            id,
            src_id,
            dst_id,
            weight: 1.0,
            created: Utc::now(),
        }
    }

    #[test]
    fn test_adjacency_sorted_by_edge_id() {
        let nodes = vec![node(1), node(2), node(3)];
        let edges = vec![edge(9, 1, 3), edge(2, 1, 2), edge(5, 2, 3)];
        let snapshot = GraphSnapshot::new(&nodes, &edges);

        let ids: Vec<i64> = snapshot.outbound_edges(1).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 9]);
        assert_eq!(snapshot.outbound_edges(3).len(), 0);
        assert_eq!(snapshot.node_count(), 3);
        assert_eq!(snapshot.edge_count(), 3);
    }

    #[test]
    fn test_contains_node() {
        let nodes = vec![node(1)];
        let snapshot = GraphSnapshot::new(&nodes, &Vec::<Edge>::new());
        assert!(snapshot.contains_node(1));
        assert!(!snapshot.contains_node(2));
    }
}
