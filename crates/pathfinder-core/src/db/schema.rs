//! SQLite database schema for pathfinder

use rusqlite::{Connection, OptionalExtension, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, tables created
    Created,
    /// Existing database at the current version
    Current,
    /// Existing database written by a newer version
    TooNew(i32),
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS nodes (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    created TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_nodes_name ON nodes(name);

-- Directed weighted edges; deleting a node removes its edges
CREATE TABLE IF NOT EXISTS edges (
    id INTEGER PRIMARY KEY,
    src_id INTEGER NOT NULL REFERENCES nodes(id) ON DELETE CASCADE,
    dst_id INTEGER NOT NULL REFERENCES nodes(id) ON DELETE CASCADE,
    weight REAL NOT NULL CHECK (weight >= 0),
    created TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_edges_src ON edges(src_id);
CREATE INDEX IF NOT EXISTS idx_edges_dst ON edges(dst_id);

-- Schema version and id counters
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let has_meta: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
            [],
            |_| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    let current_version: Option<i32> = if has_meta {
        conn.query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .optional()?
    } else {
        None
    };

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute(
                "INSERT OR REPLACE INTO meta (key, value) VALUES ('schema_version', ?1)",
                [CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v > CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::TooNew(v)),
        Some(_) => {
            conn.execute_batch(SCHEMA_SQL)?;
            Ok(SchemaCreateResult::Current)
        }
    }
}
