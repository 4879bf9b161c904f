use super::*;
use crate::config::GraphConfig;
use tempfile::tempdir;

fn memory_store() -> GraphStore {
    GraphStore::in_memory(StoreConfig::default())
}

#[test]
fn test_create_and_list_nodes_in_creation_order() {
    let store = memory_store();
    let a = store.create_node("A").unwrap();
    let b = store.create_node("B").unwrap();
    let c = store.create_node("A").unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    let names: Vec<String> = store.list_nodes().into_iter().map(|n| n.name).collect();
    assert_eq!(names, vec!["A", "B", "A"]);
    assert_eq!(store.find_node_by_name("A").unwrap().id, 1);
}

#[test]
fn test_create_node_rejects_empty_name() {
    let store = memory_store();
    let err = store.create_node("").unwrap_err();
    assert!(matches!(err, PathfinderError::InvalidInput(_)));
    assert!(store.list_nodes().is_empty());
}

#[test]
fn test_create_edge_failures_leave_state_unchanged() {
    let store = memory_store();
    store.create_node("A").unwrap();

    assert!(matches!(
        store.create_edge(1, 2, 1.0),
        Err(PathfinderError::NodeNotFound { id: 2 })
    ));
    assert!(matches!(
        store.create_edge(1, 1, -3.0),
        Err(PathfinderError::InvalidInput(_))
    ));
    assert!(store.list_edges().is_empty());

    // The failed attempts did not consume an edge id
    let edge = store.create_edge(1, 1, 3.0).unwrap();
    assert_eq!(edge.id, 1);
}

#[test]
fn test_delete_node_cascades() {
    let store = memory_store();
    let a = store.create_node("A").unwrap();
    let b = store.create_node("B").unwrap();
    let c = store.create_node("C").unwrap();
    let e1 = store.create_edge(a.id, b.id, 5.0).unwrap();
    let e2 = store.create_edge(a.id, c.id, 10.0).unwrap();
    let e3 = store.create_edge(b.id, c.id, 3.0).unwrap();

    store.delete_node(b.id).unwrap();

    let remaining: Vec<i64> = store.list_edges().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![e2.id]);
    assert!(store.get_edge(e1.id).is_none());
    assert!(store.get_edge(e3.id).is_none());
    assert!(store.get_node(b.id).is_none());
}

#[test]
fn test_delete_missing_ids() {
    let store = memory_store();
    assert!(matches!(
        store.delete_node(3),
        Err(PathfinderError::NodeNotFound { id: 3 })
    ));
    assert!(matches!(
        store.delete_edge(3),
        Err(PathfinderError::EdgeNotFound { id: 3 })
    ));
}

#[test]
fn test_create_then_delete_round_trip() {
    let store = memory_store();
    let a = store.create_node("A").unwrap();
    let b = store.create_node("B").unwrap();
    store.create_edge(a.id, b.id, 1.0).unwrap();
    let nodes_before = store.list_nodes();
    let edges_before = store.list_edges();

    let c = store.create_node("C").unwrap();
    let edge = store.create_edge(a.id, c.id, 2.0).unwrap();
    store.delete_edge(edge.id).unwrap();
    store.delete_node(c.id).unwrap();

    assert_eq!(store.list_nodes(), nodes_before);
    assert_eq!(store.list_edges(), edges_before);
}

#[test]
fn test_outbound_edges_sorted_by_id() {
    let store = memory_store();
    let a = store.create_node("A").unwrap();
    let b = store.create_node("B").unwrap();
    store.create_edge(a.id, b.id, 1.0).unwrap();
    store.create_edge(b.id, a.id, 1.0).unwrap();
    store.create_edge(a.id, b.id, 0.5).unwrap();

    let ids: Vec<i64> = store.outbound_edges(a.id).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(store.has_edge_between(b.id, a.id));
    assert!(!store.has_edge_between(a.id, a.id));
}

#[test]
fn test_reject_self_loops_policy() {
    let store = GraphStore::in_memory(StoreConfig {
        graph: GraphConfig {
            reject_self_loops: true,
        },
        ..StoreConfig::default()
    });
    let a = store.create_node("A").unwrap();

    assert!(matches!(
        store.create_edge(a.id, a.id, 1.0),
        Err(PathfinderError::InvalidInput(_))
    ));
}

#[test]
fn test_persisted_store_reopens_with_same_graph() {
    let dir = tempdir().unwrap();
    {
        let store = GraphStore::init(dir.path(), StoreConfig::default()).unwrap();
        let a = store.create_node("A").unwrap();
        let b = store.create_node("B").unwrap();
        store.create_edge(a.id, b.id, 4.0).unwrap();
        assert!(store.is_persistent());
    }

    let store = GraphStore::discover(dir.path()).unwrap();
    assert_eq!(store.stats().nodes, 2);
    assert_eq!(store.stats().edges, 1);
    assert_eq!(store.list_edges()[0].weight, 4.0);
    assert!(store.verify().unwrap());
}

#[test]
fn test_ids_not_reused_across_reopen() {
    let dir = tempdir().unwrap();
    {
        let store = GraphStore::init(dir.path(), StoreConfig::default()).unwrap();
        store.create_node("A").unwrap();
        let b = store.create_node("B").unwrap();
        store.delete_node(b.id).unwrap();
    }

    let store = GraphStore::discover(dir.path()).unwrap();
    let c = store.create_node("C").unwrap();
    assert_eq!(c.id, 3);
}

#[test]
fn test_persisted_cascade_survives_reopen() {
    let dir = tempdir().unwrap();
    {
        let store = GraphStore::init(dir.path(), StoreConfig::default()).unwrap();
        let a = store.create_node("A").unwrap();
        let b = store.create_node("B").unwrap();
        store.create_edge(a.id, b.id, 1.0).unwrap();
        store.create_edge(b.id, a.id, 1.0).unwrap();
        store.delete_node(a.id).unwrap();
    }

    let store = GraphStore::discover(dir.path()).unwrap();
    assert_eq!(store.stats().nodes, 1);
    assert!(store.list_edges().is_empty());
}

#[test]
fn test_init_twice_fails() {
    let dir = tempdir().unwrap();
    GraphStore::init(dir.path(), StoreConfig::default()).unwrap();

    let err = GraphStore::init(dir.path(), StoreConfig::default()).unwrap_err();
    assert!(matches!(err, PathfinderError::StoreAlreadyExists { .. }));
}

#[test]
fn test_open_missing_directory() {
    let dir = tempdir().unwrap();
    let err = GraphStore::open(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, PathfinderError::StoreNotFound { .. }));
}

#[test]
fn test_config_is_loaded_from_store() {
    let dir = tempdir().unwrap();
    let mut config = StoreConfig::default();
    config.graph.reject_self_loops = true;
    GraphStore::init(dir.path(), config).unwrap();

    let store = GraphStore::discover(dir.path()).unwrap();
    assert!(store.config().graph.reject_self_loops);
    assert!(store.root().unwrap().ends_with(DEFAULT_STORE_DIR));
}

#[test]
fn test_snapshot_is_isolated_from_later_mutations() {
    let store = memory_store();
    let a = store.create_node("A").unwrap();
    let b = store.create_node("B").unwrap();
    store.create_edge(a.id, b.id, 1.0).unwrap();

    let snapshot = store.snapshot();
    store.delete_node(b.id).unwrap();

    assert_eq!(snapshot.node_count(), 2);
    assert_eq!(snapshot.edge_count(), 1);
    assert_eq!(store.snapshot().edge_count(), 0);
}
