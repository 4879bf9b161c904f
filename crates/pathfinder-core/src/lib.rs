//! Pathfinder Core Library
//!
//! Directed weighted graph store with breadth-first traversal and
//! Dijkstra shortest-path queries.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod seed;
pub mod store;

pub use error::{ErrorKind, PathfinderError, Result};
pub use graph::{AlgorithmEngine, CancelToken};
pub use store::GraphStore;
