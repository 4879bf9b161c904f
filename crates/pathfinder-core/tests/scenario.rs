//! End-to-end store and algorithm scenarios

use std::collections::HashSet;

use pathfinder_core::config::StoreConfig;
use pathfinder_core::graph::{BfsTreeEntry, CancelToken};
use pathfinder_core::{AlgorithmEngine, ErrorKind, GraphStore};

/// Nodes 1(A), 2(B), 3(C); edges 1->2 w5, 1->3 w10, 2->3 w3
fn triangle() -> GraphStore {
    let store = GraphStore::in_memory(StoreConfig::default());
    for name in ["A", "B", "C"] {
        store.create_node(name).unwrap();
    }
    store.create_edge(1, 2, 5.0).unwrap();
    store.create_edge(1, 3, 10.0).unwrap();
    store.create_edge(2, 3, 3.0).unwrap();
    store
}

#[test]
fn test_triangle_bfs_and_shortest_path() {
    let store = triangle();
    let engine = AlgorithmEngine::new(&store);
    let cancel = CancelToken::new();

    let bfs = engine.bfs(1, &cancel).unwrap();
    assert_eq!(bfs.order, vec![1, 2, 3]);
    assert_eq!(
        bfs.tree,
        vec![
            BfsTreeEntry {
                node_id: 1,
                parent_id: None,
                depth: 0
            },
            BfsTreeEntry {
                node_id: 2,
                parent_id: Some(1),
                depth: 1
            },
            BfsTreeEntry {
                node_id: 3,
                parent_id: Some(1),
                depth: 1
            },
        ]
    );

    let path = engine.shortest_path(1, 3, &cancel).unwrap();
    assert_eq!(path.path, vec![1, 2, 3]);
    assert_eq!(path.distance, 8.0);
}

#[test]
fn test_delete_middle_node_reroutes() {
    let store = triangle();
    store.delete_node(2).unwrap();

    let edge_ids: Vec<i64> = store.list_edges().iter().map(|e| e.id).collect();
    assert_eq!(edge_ids, vec![2]);
    assert!(store
        .list_edges()
        .iter()
        .all(|e| e.src_id != 2 && e.dst_id != 2));

    let path = AlgorithmEngine::new(&store)
        .shortest_path(1, 3, &CancelToken::new())
        .unwrap();
    assert_eq!(path.path, vec![1, 3]);
    assert_eq!(path.distance, 10.0);
}

#[test]
fn test_isolated_node_is_unreachable() {
    let store = triangle();
    let isolated = store.create_node("D").unwrap();
    let engine = AlgorithmEngine::new(&store);

    let bfs = engine.bfs(1, &CancelToken::new()).unwrap();
    assert!(!bfs.order.contains(&isolated.id));

    let err = engine
        .shortest_path(1, isolated.id, &CancelToken::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoPathFound);
}

#[test]
fn test_algorithms_reject_unknown_ids() {
    let store = triangle();
    let engine = AlgorithmEngine::new(&store);

    let err = engine.bfs(99, &CancelToken::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = engine.shortest_path(1, 99, &CancelToken::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_same_endpoint_path() {
    let store = triangle();
    let path = AlgorithmEngine::new(&store)
        .shortest_path(2, 2, &CancelToken::new())
        .unwrap();
    assert_eq!(path.path, vec![2]);
    assert_eq!(path.distance, 0.0);
}

#[test]
fn test_cancelled_run_reports_cancelled() {
    let store = triangle();
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = AlgorithmEngine::new(&store).bfs(1, &cancel).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    // Read-only runs leave the store untouched
    assert_eq!(store.stats().edges, 3);
}

/// Readers racing a cascade delete must never see an edge whose endpoint
/// is already gone
#[test]
fn test_concurrent_readers_never_see_dangling_edges() {
    let store = GraphStore::in_memory(StoreConfig::default());
    let hub = store.create_node("hub").unwrap();
    let mut spokes = Vec::new();
    for i in 0..50 {
        let spoke = store.create_node(&format!("spoke-{}", i)).unwrap();
        store.create_edge(hub.id, spoke.id, 1.0).unwrap();
        store.create_edge(spoke.id, hub.id, 1.0).unwrap();
        spokes.push(spoke.id);
    }

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for id in &spokes {
                store.delete_node(*id).unwrap();
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                let engine = AlgorithmEngine::new(&store);
                for _ in 0..50 {
                    let bfs = engine.bfs(hub.id, &CancelToken::new()).unwrap();
                    assert_eq!(bfs.order[0], hub.id);

                    // Nodes are only removed here, so every edge still
                    // present must point at nodes from the earlier listing
                    let nodes: HashSet<i64> = store.list_nodes().iter().map(|n| n.id).collect();
                    for edge in store.list_edges() {
                        assert!(nodes.contains(&edge.src_id));
                        assert!(nodes.contains(&edge.dst_id));
                    }
                }
            });
        }
    });

    assert_eq!(store.stats().nodes, 1);
    assert_eq!(store.stats().edges, 0);
}
