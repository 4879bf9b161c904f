//! CLI commands for pathfinder

pub mod cancel;
pub mod dispatch;
pub mod edge;
pub mod format;
pub mod init;
pub mod node;
pub mod seed;
pub mod stats;
pub mod traverse;
