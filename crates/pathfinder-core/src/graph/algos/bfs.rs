use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::error::{PathfinderError, Result};
use crate::graph::cancel::CancelToken;
use crate::graph::types::{BfsResult, BfsTreeEntry, NodeId};
use crate::graph::GraphProvider;
use crate::trace_time;

/// State tracked during breadth-first traversal
struct BfsState {
    visited: HashSet<NodeId>,
    queue: VecDeque<(NodeId, u32)>,
    result: BfsResult,
}

impl BfsState {
    fn new(start: NodeId) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            result: BfsResult::default(),
        };
        state.discover(start, None, 0);
        state
    }

    /// Record a node the first time it is seen. Later sightings are
    /// ignored so the first-seen parent is never overwritten.
    fn discover(&mut self, node_id: NodeId, parent_id: Option<NodeId>, depth: u32) {
        if !self.visited.insert(node_id) {
            return;
        }
        self.result.order.push(node_id);
        self.result.tree.push(BfsTreeEntry {
            node_id,
            parent_id,
            depth,
        });
        self.queue.push_back((node_id, depth));
    }
}

/// Breadth-first traversal along outgoing edges from `start`.
///
/// Neighbors are scanned in the order the provider returns them
/// (ascending edge id for [`GraphSnapshot`](crate::graph::GraphSnapshot)).
/// Only reachable nodes appear in the result, each exactly once.
#[tracing::instrument(skip(provider, cancel), fields(start = %start))]
pub fn bfs_traverse(
    provider: &dyn GraphProvider,
    start: NodeId,
    cancel: &CancelToken,
) -> Result<BfsResult> {
    let begin = Instant::now();

    if !provider.contains_node(start) {
        return Err(PathfinderError::NodeNotFound { id: start });
    }

    let mut state = BfsState::new(start);

    while let Some((current_id, depth)) = state.queue.pop_front() {
        cancel.check()?;

        for edge in provider.outbound_edges(current_id) {
            state.discover(edge.dst_id, Some(current_id), depth + 1);
        }
    }

    tracing::debug!(visited = state.result.order.len(), "bfs complete");
    trace_time!(begin, "bfs_traverse");

    Ok(state.result)
}
