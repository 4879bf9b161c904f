use rusqlite::{params, Transaction};

use crate::error::Result;
use crate::graph::types::{Node, NodeId};
use crate::map_db_err;

use super::{parse_timestamp, set_counter, COUNTER_NEXT_NODE_ID};

impl super::Database {
    /// Insert a node and advance the node id counter in one transaction
    pub fn insert_node(&mut self, node: &Node) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin insert_node", e))?;

        tx.execute(
            "INSERT INTO nodes (id, name, created) VALUES (?1, ?2, ?3)",
            params![node.id, node.name, node.created.to_rfc3339()],
        )
        .map_err(|e| map_db_err!("insert node", e))?;
        set_counter(&tx, COUNTER_NEXT_NODE_ID, node.id + 1)?;

        tx.commit().map_err(|e| map_db_err!("commit insert_node", e))
    }

    /// Delete a node and every edge touching it. Returns the number of
    /// edges removed.
    pub fn delete_node_cascade(&mut self, id: NodeId) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| map_db_err!("begin delete_node", e))?;

        let removed_edges = delete_edges_touching(&tx, id)?;
        tx.execute("DELETE FROM nodes WHERE id = ?1", params![id])
            .map_err(|e| map_db_err!("delete node", e))?;

        tx.commit()
            .map_err(|e| map_db_err!("commit delete_node", e))?;
        Ok(removed_edges)
    }

    /// Load all nodes in ascending id order
    pub fn load_nodes(&self) -> Result<Vec<Node>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created FROM nodes ORDER BY id")
            .map_err(|e| map_db_err!("prepare load_nodes", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, NodeId>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| map_db_err!("load nodes", e))?;

        let mut nodes = Vec::new();
        for row in rows {
            let (id, name, created) = row.map_err(|e| map_db_err!("read node", e))?;
            nodes.push(Node {
                id,
                name,
                created: parse_timestamp(&created)?,
            });
        }
        Ok(nodes)
    }
}

/// Edges are removed explicitly rather than relying on the foreign key
/// cascade so the count is observable.
fn delete_edges_touching(tx: &Transaction<'_>, id: NodeId) -> Result<usize> {
    tx.execute(
        "DELETE FROM edges WHERE src_id = ?1 OR dst_id = ?1",
        params![id],
    )
    .map_err(|e| map_db_err!("delete node edges", e))
}
