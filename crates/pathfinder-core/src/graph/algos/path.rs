//! Path reconstruction utilities for graph traversal

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// Follow predecessor links from `to` back to `from` and return the
/// route in forward order, both endpoints inclusive.
///
/// Returns `None` if the chain breaks before reaching `from`.
pub fn reconstruct_path(
    from: NodeId,
    to: NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        current = *predecessors.get(&current)?;
        path.push(current);
        // A chain longer than the map means a cycle in the links
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_multi_hop() {
        let predecessors = HashMap::from([(2, 1), (3, 2), (4, 3)]);
        assert_eq!(reconstruct_path(1, 4, &predecessors), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_reconstruct_same_endpoint() {
        assert_eq!(reconstruct_path(5, 5, &HashMap::new()), Some(vec![5]));
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let predecessors = HashMap::from([(3, 2)]);
        assert_eq!(reconstruct_path(1, 3, &predecessors), None);
    }

    #[test]
    fn test_reconstruct_cycle_terminates() {
        let predecessors = HashMap::from([(2, 3), (3, 2)]);
        assert_eq!(reconstruct_path(1, 3, &predecessors), None);
    }
}
