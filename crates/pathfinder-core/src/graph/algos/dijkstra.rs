use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::error::{PathfinderError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::cancel::CancelToken;
use crate::graph::types::{NodeId, ShortestPath};
use crate::graph::GraphProvider;
use crate::trace_time;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then by node id so equal distances pop the smallest id first)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState {
    finalized: HashSet<NodeId>,
    distances: HashMap<NodeId, f64>,
    predecessors: HashMap<NodeId, NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(from: NodeId) -> Self {
        let mut state = Self {
            finalized: HashSet::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.distances.insert(from, 0.0);
        state.heap.push(Reverse(HeapEntry {
            node_id: from,
            distance: 0.0,
        }));
        state
    }

    fn tentative(&self, node_id: NodeId) -> f64 {
        self.distances.get(&node_id).copied().unwrap_or(f64::INFINITY)
    }

    /// Lower `node_id`'s tentative distance if the route through `via` is
    /// strictly cheaper. Equal-cost alternatives keep the existing predecessor.
    /// A first sighting always records a predecessor, even when the summed
    /// weights overflow to infinity.
    fn relax(&mut self, via: NodeId, node_id: NodeId, candidate: f64) {
        let unseen = !self.distances.contains_key(&node_id);
        if unseen || candidate < self.tentative(node_id) {
            self.distances.insert(node_id, candidate);
            self.predecessors.insert(node_id, via);
            self.heap.push(Reverse(HeapEntry {
                node_id,
                distance: candidate,
            }));
        }
    }
}

/// Run Dijkstra from `from` until `to` is finalized or the frontier is empty.
/// Returns the finalized distance of `to`, if reached.
fn dijkstra_search(
    provider: &dyn GraphProvider,
    state: &mut DijkstraState,
    to: NodeId,
    cancel: &CancelToken,
) -> Result<Option<f64>> {
    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        distance,
    })) = state.heap.pop()
    {
        // Stale entry superseded by a cheaper relaxation
        if !state.finalized.insert(current_id) {
            continue;
        }

        cancel.check()?;

        if current_id == to {
            return Ok(Some(distance));
        }

        for edge in provider.outbound_edges(current_id) {
            if state.finalized.contains(&edge.dst_id) {
                continue;
            }
            state.relax(current_id, edge.dst_id, distance + edge.weight);
        }
    }

    Ok(None)
}

/// Least-cost directed path from `from` to `to` over non-negative weights.
///
/// Candidates sharing the minimum tentative distance are finalized in
/// ascending node id order. `from == to` yields `[from]` at distance 0.
#[tracing::instrument(skip(provider, cancel), fields(from = %from, to = %to))]
pub fn dijkstra_shortest_path(
    provider: &dyn GraphProvider,
    from: NodeId,
    to: NodeId,
    cancel: &CancelToken,
) -> Result<ShortestPath> {
    let begin = Instant::now();

    for id in [from, to] {
        if !provider.contains_node(id) {
            return Err(PathfinderError::NodeNotFound { id });
        }
    }

    cancel.check()?;

    if from == to {
        return Ok(ShortestPath {
            path: vec![from],
            distance: 0.0,
        });
    }

    let mut state = DijkstraState::new(from);
    let found = dijkstra_search(provider, &mut state, to, cancel)?;

    tracing::debug!(
        finalized = state.finalized.len(),
        found = found.is_some(),
        "dijkstra complete"
    );
    trace_time!(begin, "dijkstra_shortest_path");

    let distance = found.ok_or(PathfinderError::NoPathFound { from, to })?;
    let path = reconstruct_path(from, to, &state.predecessors).ok_or_else(|| {
        PathfinderError::Other(format!("broken predecessor chain from {} to {}", from, to))
    })?;

    Ok(ShortestPath { path, distance })
}
