//! CSV seed import
//!
//! Loads `nodes.csv` (`name`) and `edges.csv` (`src_name,dst_name,weight`)
//! into a store. Loading is idempotent: nodes are matched by name and edges
//! by their `(src, dst)` pair, so re-running a seed creates nothing new.
//! Both files are parsed and validated before the store is touched.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::NodeId;
use crate::store::GraphStore;

#[derive(Debug, Deserialize)]
struct NodeRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    src_name: String,
    dst_name: String,
    weight: String,
}

/// A validated edge row
#[derive(Debug)]
struct EdgeRow {
    src_name: String,
    dst_name: String,
    weight: f64,
}

/// Counts reported after a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub nodes_created: usize,
    pub nodes_skipped: usize,
    pub edges_created: usize,
    pub edges_skipped: usize,
    /// Edges naming a node that is neither in the store nor in the seed
    pub edges_unresolved: usize,
}

fn read_node_names(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut names = Vec::new();

    for record in reader.deserialize::<NodeRecord>() {
        let name = record?.name.trim().to_string();
        if !name.is_empty() {
            names.push(name);
        }
    }
    Ok(names)
}

fn read_edge_rows(path: &Path, reject_self_loops: bool) -> Result<Vec<EdgeRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for (index, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let record = record?;
        // Header is line 1
        let line = index + 2;
        let weight: f64 = match record.weight.trim().parse() {
            Ok(w) => w,
            Err(_) => bail_invalid!(
                "{} line {}: weight '{}' is not a number",
                path.display(),
                line,
                record.weight
            ),
        };
        if !weight.is_finite() || weight < 0.0 {
            bail_invalid!(
                "{} line {}: weight must be a finite number >= 0, got {}",
                path.display(),
                line,
                weight
            );
        }
        let src_name = record.src_name.trim().to_string();
        let dst_name = record.dst_name.trim().to_string();
        // Names resolve to a single node, so equal names are a self-loop
        if reject_self_loops && src_name == dst_name {
            bail_invalid!(
                "{} line {}: self-loop on '{}' is not allowed",
                path.display(),
                line,
                src_name
            );
        }
        rows.push(EdgeRow {
            src_name,
            dst_name,
            weight,
        });
    }
    Ok(rows)
}

/// Import seed CSV files into `store`
#[tracing::instrument(skip(store, nodes_path, edges_path), fields(nodes = %nodes_path.display(), edges = %edges_path.display()))]
pub fn load_seed(store: &GraphStore, nodes_path: &Path, edges_path: &Path) -> Result<SeedReport> {
    let names = read_node_names(nodes_path)?;
    let edge_rows = read_edge_rows(edges_path, store.config().graph.reject_self_loops)?;
    let mut report = SeedReport::default();

    let mut node_map: HashMap<String, NodeId> = HashMap::new();
    for name in names {
        if let Some(existing) = store.find_node_by_name(&name) {
            node_map.insert(name, existing.id);
            report.nodes_skipped += 1;
        } else {
            let node = store.create_node(&name)?;
            node_map.insert(name, node.id);
            report.nodes_created += 1;
        }
    }

    for row in edge_rows {
        let resolve = |name: &str| {
            node_map
                .get(name)
                .copied()
                .or_else(|| store.find_node_by_name(name).map(|n| n.id))
        };
        let (Some(src_id), Some(dst_id)) = (resolve(&row.src_name), resolve(&row.dst_name)) else {
            tracing::warn!(
                src = %row.src_name,
                dst = %row.dst_name,
                "seed edge references unknown node, skipping"
            );
            report.edges_unresolved += 1;
            continue;
        };

        if store.has_edge_between(src_id, dst_id) {
            report.edges_skipped += 1;
        } else {
            store.create_edge(src_id, dst_id, row.weight)?;
            report.edges_created += 1;
        }
    }

    tracing::info!(
        nodes_created = report.nodes_created,
        nodes_skipped = report.nodes_skipped,
        edges_created = report.edges_created,
        edges_skipped = report.edges_skipped,
        edges_unresolved = report.edges_unresolved,
        "seed loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::PathfinderError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_seed(dir: &Path, nodes: &str, edges: &str) -> (PathBuf, PathBuf) {
        let nodes_path = dir.join("nodes.csv");
        let edges_path = dir.join("edges.csv");
        fs::write(&nodes_path, nodes).unwrap();
        fs::write(&edges_path, edges).unwrap();
        (nodes_path, edges_path)
    }

    #[test]
    fn test_load_seed_creates_graph() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\nB\nC\n",
            "src_name,dst_name,weight\nA,B,5\nA,C,10\nB,C,3\n",
        );
        let store = GraphStore::in_memory(StoreConfig::default());

        let report = load_seed(&store, &nodes, &edges).unwrap();

        assert_eq!(report.nodes_created, 3);
        assert_eq!(report.edges_created, 3);
        assert_eq!(store.stats().edges, 3);
        let c = store.find_node_by_name("C").unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_load_seed_is_idempotent() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\nB\n",
            "src_name,dst_name,weight\nA,B,1.5\n",
        );
        let store = GraphStore::in_memory(StoreConfig::default());

        load_seed(&store, &nodes, &edges).unwrap();
        let second = load_seed(&store, &nodes, &edges).unwrap();

        assert_eq!(
            second,
            SeedReport {
                nodes_created: 0,
                nodes_skipped: 2,
                edges_created: 0,
                edges_skipped: 1,
                edges_unresolved: 0,
            }
        );
        assert_eq!(store.stats().nodes, 2);
        assert_eq!(store.stats().edges, 1);
    }

    #[test]
    fn test_load_seed_skips_blank_and_unknown() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\n  \nB\nA\n",
            "src_name,dst_name,weight\nA,Z,1\nB,A,2\n",
        );
        let store = GraphStore::in_memory(StoreConfig::default());

        let report = load_seed(&store, &nodes, &edges).unwrap();

        assert_eq!(report.nodes_created, 2);
        assert_eq!(report.nodes_skipped, 1);
        assert_eq!(report.edges_unresolved, 1);
        assert_eq!(report.edges_created, 1);
    }

    #[test]
    fn test_invalid_weight_aborts_before_any_change() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\nB\n",
            "src_name,dst_name,weight\nA,B,1\nB,A,-4\n",
        );
        let store = GraphStore::in_memory(StoreConfig::default());

        let err = load_seed(&store, &nodes, &edges).unwrap_err();

        assert!(matches!(err, PathfinderError::InvalidInput(ref msg) if msg.contains("line 3")));
        assert_eq!(store.stats().nodes, 0);
    }

    #[test]
    fn test_rejected_self_loop_aborts_before_any_change() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\nB\n",
            "src_name,dst_name,weight\nA,B,1\nA,A,1\n",
        );
        let mut config = StoreConfig::default();
        config.graph.reject_self_loops = true;
        let store = GraphStore::in_memory(config);

        let err = load_seed(&store, &nodes, &edges).unwrap_err();

        assert!(matches!(err, PathfinderError::InvalidInput(ref msg) if msg.contains("line 3")));
        assert_eq!(store.stats().nodes, 0);
        assert_eq!(store.stats().edges, 0);
    }

    #[test]
    fn test_self_loop_allowed_by_default() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(dir.path(), "name\nA\n", "src_name,dst_name,weight\nA,A,1\n");
        let store = GraphStore::in_memory(StoreConfig::default());

        let report = load_seed(&store, &nodes, &edges).unwrap();
        assert_eq!(report.edges_created, 1);
    }

    #[test]
    fn test_non_numeric_weight() {
        let dir = tempdir().unwrap();
        let (nodes, edges) = write_seed(
            dir.path(),
            "name\nA\n",
            "src_name,dst_name,weight\nA,A,heavy\n",
        );
        let store = GraphStore::in_memory(StoreConfig::default());

        let err = load_seed(&store, &nodes, &edges).unwrap_err();
        assert!(matches!(err, PathfinderError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let store = GraphStore::in_memory(StoreConfig::default());

        let err = load_seed(
            &store,
            &dir.path().join("nodes.csv"),
            &dir.path().join("edges.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, PathfinderError::Csv(_)));
    }
}
