use rusqlite::params;

use crate::error::{PathfinderError, Result};
use crate::graph::types::{Edge, EdgeId, NodeId};
use crate::map_db_err;

use super::{parse_timestamp, set_counter, COUNTER_NEXT_EDGE_ID};

impl super::Database {
    /// Insert an edge and advance the edge id counter in one transaction
    pub fn insert_edge(&mut self, edge: &Edge) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin insert_edge", e))?;

        tx.execute(
            "INSERT INTO edges (id, src_id, dst_id, weight, created) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                edge.id,
                edge.src_id,
                edge.dst_id,
                edge.weight,
                edge.created.to_rfc3339()
            ],
        )
        .map_err(|e| map_db_err!("insert edge", e))?;
        set_counter(&tx, COUNTER_NEXT_EDGE_ID, edge.id + 1)?;

        tx.commit().map_err(|e| map_db_err!("commit insert_edge", e))
    }

    pub fn delete_edge(&mut self, id: EdgeId) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM edges WHERE id = ?1", params![id])
            .map_err(|e| map_db_err!("delete edge", e))?;

        if deleted == 0 {
            return Err(PathfinderError::EdgeNotFound { id });
        }
        Ok(())
    }

    /// Load all edges in ascending id order
    pub fn load_edges(&self) -> Result<Vec<Edge>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, src_id, dst_id, weight, created FROM edges ORDER BY id")
            .map_err(|e| map_db_err!("prepare load_edges", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, EdgeId>(0)?,
                    row.get::<_, NodeId>(1)?,
                    row.get::<_, NodeId>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(|e| map_db_err!("load edges", e))?;

        let mut edges = Vec::new();
        for row in rows {
            let (id, src_id, dst_id, weight, created) =
                row.map_err(|e| map_db_err!("read edge", e))?;
            edges.push(Edge {
                id,
                src_id,
                dst_id,
                weight,
                created: parse_timestamp(&created)?,
            });
        }
        Ok(edges)
    }
}
