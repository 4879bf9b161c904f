use crate::graph::types::{Edge, NodeId};

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider {
    /// Whether `id` names a live node
    fn contains_node(&self, id: NodeId) -> bool;

    /// Outgoing edges of `id`, in ascending edge id order
    fn outbound_edges(&self, id: NodeId) -> &[Edge];
}
