//! Stateless algorithm runner over a [`GraphStore`]

use crate::error::Result;
use crate::graph::algos::{bfs_traverse, dijkstra_shortest_path};
use crate::graph::cancel::CancelToken;
use crate::graph::types::{BfsResult, NodeId, ShortestPath};
use crate::store::GraphStore;

/// Runs read-only algorithms against a store.
///
/// Each call takes its own snapshot, so concurrent runs share nothing
/// mutable and never observe a half-applied mutation.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmEngine<'a> {
    store: &'a GraphStore,
}

impl<'a> AlgorithmEngine<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Breadth-first traversal from `start`
    pub fn bfs(&self, start: NodeId, cancel: &CancelToken) -> Result<BfsResult> {
        let snapshot = self.store.snapshot();
        bfs_traverse(&snapshot, start, cancel)
    }

    /// Least-cost path from `from` to `to`
    pub fn shortest_path(
        &self,
        from: NodeId,
        to: NodeId,
        cancel: &CancelToken,
    ) -> Result<ShortestPath> {
        let snapshot = self.store.snapshot();
        dijkstra_shortest_path(&snapshot, from, to, cancel)
    }
}
