//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no path")
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (unknown id, invalid input, missing store)
//! - 130: Traversal cancelled

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::types::{EdgeId, NodeId};

/// Exit codes for the pathfinder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - unknown id, invalid value, missing store (3)
    Data = 3,
    /// Interrupted by the user or a deadline (130)
    Cancelled = 130,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Coarse error classification handed to transport layers.
///
/// Every [`PathfinderError`] collapses to exactly one kind; a server or CLI
/// maps kinds to its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced node or edge id does not exist
    NotFound,
    /// Malformed or out-of-domain value
    InvalidInput,
    /// No directed route between the requested endpoints
    NoPathFound,
    /// The caller aborted an in-flight algorithm run
    Cancelled,
    /// Infrastructure failures (I/O, database, serialization)
    Other,
}

/// Errors that can occur during pathfinder operations
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Domain errors
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("edge not found: {id}")]
    EdgeNotFound { id: EdgeId },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no path found from {from} to {to}")]
    NoPathFound { from: NodeId, to: NodeId },

    #[error("operation cancelled")]
    Cancelled,

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("store already exists at {path:?}")]
    StoreAlreadyExists { path: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error during {operation}: {reason}")]
    Database { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for PathfinderError {
    fn from(err: rusqlite::Error) -> Self {
        PathfinderError::Database {
            operation: "query".to_string(),
            reason: err.to_string(),
        }
    }
}

impl PathfinderError {
    /// Build an `InvalidInput` error from any displayable message
    pub fn invalid(msg: impl Into<String>) -> Self {
        PathfinderError::InvalidInput(msg.into())
    }

    /// Wrap a database error with the name of the failing operation
    pub fn db_operation(operation: &str, err: impl std::fmt::Display) -> Self {
        PathfinderError::Database {
            operation: operation.to_string(),
            reason: err.to_string(),
        }
    }

    /// Classify this error into one of the transport-agnostic kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathfinderError::NodeNotFound { .. } | PathfinderError::EdgeNotFound { .. } => {
                ErrorKind::NotFound
            }
            PathfinderError::InvalidInput(_) => ErrorKind::InvalidInput,
            PathfinderError::NoPathFound { .. } => ErrorKind::NoPathFound,
            PathfinderError::Cancelled => ErrorKind::Cancelled,
            _ => ErrorKind::Other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UnknownFormat(_)
            | PathfinderError::DuplicateFormat
            | PathfinderError::UsageError(_) => ExitCode::Usage,

            PathfinderError::NodeNotFound { .. }
            | PathfinderError::EdgeNotFound { .. }
            | PathfinderError::InvalidInput(_)
            | PathfinderError::StoreNotFound { .. }
            | PathfinderError::StoreAlreadyExists { .. }
            | PathfinderError::InvalidStore { .. } => ExitCode::Data,

            PathfinderError::Cancelled => ExitCode::Cancelled,

            PathfinderError::NoPathFound { .. }
            | PathfinderError::Io(_)
            | PathfinderError::Json(_)
            | PathfinderError::Toml(_)
            | PathfinderError::Csv(_)
            | PathfinderError::Database { .. }
            | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::NodeNotFound { .. } => "node_not_found",
            PathfinderError::EdgeNotFound { .. } => "edge_not_found",
            PathfinderError::InvalidInput(_) => "invalid_input",
            PathfinderError::NoPathFound { .. } => "no_path_found",
            PathfinderError::Cancelled => "cancelled",
            PathfinderError::UnknownFormat(_) => "unknown_format",
            PathfinderError::DuplicateFormat => "duplicate_format",
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::StoreNotFound { .. } => "store_not_found",
            PathfinderError::StoreAlreadyExists { .. } => "store_already_exists",
            PathfinderError::InvalidStore { .. } => "invalid_store",
            PathfinderError::Io(_) => "io_error",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::Csv(_) => "csv_error",
            PathfinderError::Database { .. } => "database_error",
            PathfinderError::Other(_) => "other",
        }
    }
}

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;
