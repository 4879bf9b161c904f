//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal with spanning tree
//! - `dijkstra`: Weighted shortest path finding
//! - `path`: Predecessor-chain reconstruction shared by path finders

pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::bfs_traverse;
pub use dijkstra::{dijkstra_shortest_path, HeapEntry};
pub use path::reconstruct_path;
