//! Phase 4 tests: BFS / DFS visit sequences.

use graph_stepper::engine::{JsonImporter, TraversalEngine};
use graph_stepper::graph::{Bfs, Dfs, GraphBuilder, GraphStore};
use graph_stepper::types::{GraphError, NodeId, TraversalKind, VisitEvent};

/// 1->2, 1->3, 2->4, 3->4
fn diamond() -> GraphStore {
    let mut b = GraphBuilder::new();
    b.add_nodes(4);
    b.link(1, 2).link(1, 3).link(2, 4).link(3, 4);
    b.build().unwrap()
}

fn order(events: impl Iterator<Item = VisitEvent>) -> Vec<NodeId> {
    events.map(|e| e.node).collect()
}

// ==================== BFS ====================

#[test]
fn test_bfs_diamond() {
    let graph = diamond();
    let engine = TraversalEngine::new();
    assert_eq!(order(engine.bfs(&graph, Some(1)).unwrap()), vec![1, 2, 3, 4]);
}

#[test]
fn test_bfs_event_details() {
    let graph = diamond();
    let events: Vec<VisitEvent> = Bfs::new(&graph, 1).unwrap().collect();

    assert_eq!(events[0].parent, None);
    assert_eq!(events[0].depth, 0);
    assert_eq!(events[3].node, 4);
    assert_eq!(events[3].parent, Some(2));
    assert_eq!(events[3].depth, 2);
    assert!(events.iter().enumerate().all(|(i, e)| e.step == i));
    assert!(events.iter().all(|e| e.kind == TraversalKind::Breadth));
    assert_eq!(events[0].highlight(), "green");
}

#[test]
fn test_bfs_level_order_ties_by_insertion() {
    let mut b = GraphBuilder::new();
    b.add_nodes(6);
    // neighbors of 1 inserted out of numeric order
    b.link(1, 4).link(1, 2).link(4, 6).link(2, 5).link(2, 3);
    let graph = b.build().unwrap();

    let got = TraversalEngine::new()
        .visit_order(&graph, TraversalKind::Breadth, Some(1))
        .unwrap();
    assert_eq!(got, vec![1, 4, 2, 6, 5, 3]);
}

#[test]
fn test_bfs_handles_cycles_and_self_loops() {
    let mut b = GraphBuilder::new();
    b.add_nodes(3);
    b.link(1, 1).link(1, 2).link(2, 3).link(3, 1);
    let graph = b.build().unwrap();

    assert_eq!(order(Bfs::new(&graph, 2).unwrap()), vec![2, 3, 1]);
}

#[test]
fn test_bfs_only_reaches_reachable_nodes() {
    let mut b = GraphBuilder::new();
    b.add_nodes(4);
    b.link(1, 2).link(3, 4).link(4, 1);
    let graph = b.build().unwrap();

    assert_eq!(order(Bfs::new(&graph, 1).unwrap()), vec![1, 2]);
    assert_eq!(order(Bfs::new(&graph, 3).unwrap()), vec![3, 4, 1, 2]);
}

// ==================== DFS ====================

#[test]
fn test_dfs_diamond() {
    let graph = diamond();
    let engine = TraversalEngine::new();
    assert_eq!(order(engine.dfs(&graph, Some(1)).unwrap()), vec![1, 2, 4, 3]);
}

#[test]
fn test_dfs_skips_node_visited_by_earlier_sibling() {
    // 1 -> [2, 3]; 2 -> 3. 3 is reached through 2, so it is not visited again from 1.
    let mut b = GraphBuilder::new();
    b.add_nodes(3);
    b.link(1, 2).link(1, 3).link(2, 3);
    let graph = b.build().unwrap();

    let events: Vec<VisitEvent> = Dfs::new(&graph, 1).unwrap().collect();
    assert_eq!(order(events.iter().copied()), vec![1, 2, 3]);
    assert_eq!(events[2].parent, Some(2));
    assert_eq!(events[2].depth, 2);
    assert_eq!(events[2].highlight(), "orange");
}

#[test]
fn test_dfs_matches_recursive_reference() {
    fn recurse(graph: &GraphStore, node: NodeId, seen: &mut Vec<NodeId>) {
        if seen.contains(&node) {
            return;
        }
        seen.push(node);
        let next: Vec<NodeId> = graph.neighbors(node).collect();
        for n in next {
            recurse(graph, n, seen);
        }
    }

    let mut b = GraphBuilder::new();
    b.add_nodes(8);
    b.link(1, 5)
        .link(1, 2)
        .link(5, 3)
        .link(3, 1)
        .link(3, 8)
        .link(2, 8)
        .link(2, 7)
        .link(7, 6)
        .link(6, 4)
        .link(4, 5);
    let graph = b.build().unwrap();

    for start in 1..=8 {
        let mut expected = Vec::new();
        recurse(&graph, start, &mut expected);
        assert_eq!(order(Dfs::new(&graph, start).unwrap()), expected);
    }
}

#[test]
fn test_dfs_deep_chain_without_recursion() {
    let n = 50_000;
    let mut b = GraphBuilder::new();
    let ids = b.add_nodes(n);
    for pair in ids.windows(2) {
        b.link(pair[0], pair[1]);
    }
    let graph = b.build().unwrap();

    let mut dfs = Dfs::new(&graph, 1).unwrap();
    let last = dfs.by_ref().last().unwrap();
    assert_eq!(last.node, n as NodeId);
    assert_eq!(last.depth, n as u32 - 1);
    assert!(dfs.next().is_none());
}

// ==================== Laziness / Failures ====================

#[test]
fn test_traversal_is_lazy_and_stoppable() {
    let graph = diamond();
    let mut bfs = TraversalEngine::new()
        .run(&graph, TraversalKind::Breadth, Some(1))
        .unwrap();
    assert_eq!(bfs.kind(), TraversalKind::Breadth);
    assert_eq!(bfs.next().map(|e| e.node), Some(1));
    assert_eq!(bfs.next().map(|e| e.node), Some(2));
    drop(bfs);

    // a fresh call starts over
    let again = TraversalEngine::new()
        .visit_order(&graph, TraversalKind::Breadth, Some(1))
        .unwrap();
    assert_eq!(again, vec![1, 2, 3, 4]);
}

#[test]
fn test_missing_start_is_invalid_argument() {
    let graph = diamond();
    let engine = TraversalEngine::new();

    for kind in [TraversalKind::Breadth, TraversalKind::Depth] {
        assert!(matches!(
            engine.run(&graph, kind, Some(99)),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.run(&graph, kind, None),
            Err(GraphError::InvalidArgument(_))
        ));
    }
    assert!(matches!(Bfs::new(&graph, 0), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(Dfs::new(&graph, 0), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn test_traversal_on_empty_graph() {
    let graph = GraphStore::new();
    assert!(TraversalEngine::new().bfs(&graph, Some(1)).is_err());
}

#[test]
fn test_traversal_after_import() {
    let mut graph = GraphStore::new();
    let summary = JsonImporter::new()
        .import_str(
            &mut graph,
            r#"{"adj_list": {
                "s": [{"to": "a"}, {"to": "b"}],
                "a": [{"to": "t"}],
                "b": [{"to": "t"}],
                "t": []
            }}"#,
        )
        .unwrap();
    let s = summary.id_of("s");
    let engine = TraversalEngine::new();

    let bfs = engine.visit_order(&graph, TraversalKind::Breadth, s).unwrap();
    let dfs = engine.visit_order(&graph, TraversalKind::Depth, s).unwrap();
    assert_eq!(bfs, vec![1, 2, 3, 4]);
    assert_eq!(dfs, vec![1, 2, 4, 3]);
}
