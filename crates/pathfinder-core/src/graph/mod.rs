//! Graph traversal and path-finding operations
//!
//! Provides graph algorithms for querying the stored graph:
//! - BFS traversal with spanning tree
//! - Dijkstra path-finding for weighted shortest paths
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod cancel;
pub mod engine;
pub mod snapshot;
pub mod traversal;
pub mod types;

pub use algos::{bfs_traverse, dijkstra_shortest_path};
pub use cancel::CancelToken;
pub use engine::AlgorithmEngine;
pub use snapshot::GraphSnapshot;
pub use traversal::GraphProvider;
pub use types::{
    BfsResult, BfsTreeEntry, Edge, EdgeId, GraphStats, Node, NodeId, ShortestPath,
};
