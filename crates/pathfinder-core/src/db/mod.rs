//! SQLite database module for pathfinder

mod edges;
mod nodes;
mod schema;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::error::{PathfinderError, Result};
use crate::graph::types::{Edge, EdgeId, Node, NodeId};
use crate::map_db_err;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Database filename inside the store directory
pub const DB_FILE: &str = "pathfinder.db";

const COUNTER_NEXT_NODE_ID: &str = "next_node_id";
const COUNTER_NEXT_EDGE_ID: &str = "next_edge_id";

/// Everything needed to rebuild the in-memory graph
#[derive(Debug, Default)]
pub struct LoadedGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub next_node_id: NodeId,
    pub next_edge_id: EdgeId,
}

/// SQLite database for pathfinder
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            PathfinderError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| map_db_err!("enable foreign keys", e))?;

        match create_schema(&conn).map_err(|e| map_db_err!("create schema", e))? {
            SchemaCreateResult::Created => {
                tracing::info!(path = %db_path.display(), "created database");
            }
            SchemaCreateResult::Current => {}
            SchemaCreateResult::TooNew(version) => {
                return Err(PathfinderError::InvalidStore {
                    reason: format!(
                        "database schema version {} is newer than supported version {}",
                        version, CURRENT_SCHEMA_VERSION
                    ),
                });
            }
        }

        Ok(Database { conn })
    }

    /// Read all nodes, edges and id counters
    pub fn load_graph(&self) -> Result<LoadedGraph> {
        Ok(LoadedGraph {
            nodes: self.load_nodes()?,
            edges: self.load_edges()?,
            next_node_id: self.get_counter(COUNTER_NEXT_NODE_ID)?.unwrap_or(1),
            next_edge_id: self.get_counter(COUNTER_NEXT_EDGE_ID)?.unwrap_or(1),
        })
    }

    pub fn get_node_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM nodes", [], |r| r.get(0))
            .map_err(|e| map_db_err!("count nodes", e))
    }

    pub fn get_edge_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM edges", [], |r| r.get(0))
            .map_err(|e| map_db_err!("count edges", e))
    }

    fn get_counter(&self, key: &str) -> Result<Option<i64>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM meta WHERE key = ?1", [key], |r| r.get(0))
            .optional()
            .map_err(|e| map_db_err!("read counter", e))?;

        value
            .map(|v| {
                v.parse::<i64>().map_err(|_| PathfinderError::InvalidStore {
                    reason: format!("counter {} is not an integer: {}", key, v),
                })
            })
            .transpose()
    }
}

/// Store an id counter inside an open transaction
fn set_counter(tx: &Transaction<'_>, key: &str, value: i64) -> Result<()> {
    tx.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value.to_string()],
    )
    .map_err(|e| map_db_err!("write counter", e))?;
    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PathfinderError::InvalidStore {
            reason: format!("invalid timestamp '{}': {}", raw, e),
        })
}

impl Drop for Database {
    fn drop(&mut self) {
        // Fold the WAL back into the main file so other processes see all writes
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
