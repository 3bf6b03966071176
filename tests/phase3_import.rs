//! Phase 3 tests: JSON adjacency-list import.

use std::io::Write;

use graph_stepper::config::{LayoutConfig, StepperConfig};
use graph_stepper::engine::JsonImporter;
use graph_stepper::graph::GraphStore;
use graph_stepper::types::{GraphError, Position, DEFAULT_WEIGHT};
use tempfile::NamedTempFile;

fn populated() -> GraphStore {
    let mut graph = GraphStore::new();
    let a = graph.add_node(Position::new(1.0, 1.0));
    let b = graph.add_node(Position::new(2.0, 2.0));
    graph.add_edge(a, b, 5.0).unwrap();
    graph
}

// ==================== Happy Path ====================

#[test]
fn test_import_two_nodes_one_edge() {
    let mut graph = GraphStore::new();
    let summary = JsonImporter::new()
        .import_str(&mut graph, r#"{"adj_list": {"A": [{"to": "B"}], "B": []}}"#)
        .unwrap();

    assert_eq!(summary.node_count, 2);
    assert_eq!(summary.edge_count, 1);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);

    let a = summary.id_of("A").unwrap();
    let b = summary.id_of("B").unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(graph.edge_weight(a, b).unwrap(), DEFAULT_WEIGHT);
}

#[test]
fn test_ids_follow_document_order() {
    let mut graph = GraphStore::new();
    let doc = r#"{"adj_list": {
        "zeta": [{"to": "alpha"}],
        "alpha": [{"to": "mid"}, {"to": "zeta"}],
        "mid": []
    }}"#;
    let summary = JsonImporter::new().import_str(&mut graph, doc).unwrap();

    let names: Vec<&str> = summary.mapping.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(summary.id_of("zeta"), Some(1));
    assert_eq!(summary.id_of("alpha"), Some(2));
    assert_eq!(summary.id_of("mid"), Some(3));

    let from_alpha: Vec<u64> = graph.neighbors(2).collect();
    assert_eq!(from_alpha, vec![3, 1]);
}

#[test]
fn test_imported_nodes_laid_out_on_a_line() {
    let mut graph = GraphStore::new();
    JsonImporter::new()
        .import_str(&mut graph, r#"{"adj_list": {"a": [], "b": [], "c": []}}"#)
        .unwrap();

    assert_eq!(graph.position(1), Some(Position::new(100.0, 100.0)));
    assert_eq!(graph.position(2), Some(Position::new(150.0, 100.0)));
    assert_eq!(graph.position(3), Some(Position::new(200.0, 100.0)));
}

#[test]
fn test_configured_key_layout_and_weight() {
    let config = StepperConfig {
        adjacency_key: "graph".into(),
        default_weight: 2.5,
        layout: LayoutConfig {
            origin: Position::new(0.0, 10.0),
            spacing: 20.0,
        },
        ..StepperConfig::default()
    };
    let mut graph = GraphStore::new();
    JsonImporter::from_config(&config)
        .import_str(&mut graph, r#"{"graph": {"x": [{"to": "y"}], "y": []}}"#)
        .unwrap();

    assert_eq!(graph.position(2), Some(Position::new(20.0, 10.0)));
    assert_eq!(graph.edge_weight(1, 2).unwrap(), 2.5);
}

#[test]
fn test_weight_field_in_document_ignored() {
    let mut graph = GraphStore::new();
    JsonImporter::new()
        .import_str(
            &mut graph,
            r#"{"adj_list": {"A": [{"to": "B", "weight": 9}], "B": []}}"#,
        )
        .unwrap();
    assert_eq!(graph.edge_weight(1, 2).unwrap(), DEFAULT_WEIGHT);
}

#[test]
fn test_import_replaces_previous_graph() {
    let mut graph = populated();
    graph.add_node(Position::new(3.0, 3.0));

    JsonImporter::new()
        .import_str(&mut graph, r#"{"adj_list": {"only": [{"to": "only"}]}}"#)
        .unwrap();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(1, 1));
    assert!(graph.is_consistent());
}

#[test]
fn test_duplicate_descriptors_collapse_to_one_edge() {
    let mut graph = GraphStore::new();
    let summary = JsonImporter::new()
        .import_str(
            &mut graph,
            r#"{"adj_list": {"A": [{"to": "B"}, {"to": "B"}], "B": []}}"#,
        )
        .unwrap();
    assert_eq!(summary.edge_count, 1);
}

#[test]
fn test_import_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"adj_list": {{"1": [{{"to": "2"}}], "2": [{{"to": "1"}}]}}}}"#
    )
    .unwrap();

    let mut graph = GraphStore::new();
    let summary = JsonImporter::new()
        .import_file(&mut graph, file.path())
        .unwrap();
    assert_eq!(summary.edge_count, 2);
    assert!(graph.has_edge(2, 1));
}

#[test]
fn test_import_large_chain() {
    let count = 100_000;
    let mut adj = serde_json::Map::new();
    for i in 0..count {
        let edges = if i + 1 < count {
            serde_json::json!([{ "to": format!("n{}", i + 1) }])
        } else {
            serde_json::json!([])
        };
        adj.insert(format!("n{i}"), edges);
    }
    let doc = serde_json::json!({ "adj_list": adj });

    let mut graph = GraphStore::new();
    let summary = JsonImporter::new().import_value(&mut graph, &doc).unwrap();

    assert_eq!(summary.node_count, count);
    assert_eq!(summary.edge_count, count - 1);
    assert_eq!(summary.mapping.len(), count);
    assert_eq!(summary.id_of("n0"), Some(1));
    assert_eq!(summary.id_of("n99999"), Some(100_000));
    assert_eq!(summary.id_of("n100000"), None);
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(99_999, 100_000));
    assert_eq!(graph.neighbors(100_000).count(), 0);
}

// ==================== Failures ====================

#[test]
fn test_missing_key_is_invalid_format() {
    let mut graph = GraphStore::new();
    let err = JsonImporter::new()
        .import_str(&mut graph, r#"{"nodes": {"A": []}}"#)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidFormat(_)));
    assert!(graph.is_empty());
}

#[test]
fn test_empty_or_wrong_shape_is_invalid_format() {
    for doc in [
        r#"{"adj_list": {}}"#,
        r#"{"adj_list": null}"#,
        r#"{"adj_list": ["A", "B"]}"#,
        r#"[1, 2, 3]"#,
    ] {
        let mut graph = GraphStore::new();
        let err = JsonImporter::new().import_str(&mut graph, doc).unwrap_err();
        assert!(
            matches!(err, GraphError::InvalidFormat(_)),
            "{doc}: got {err:?}"
        );
    }
}

#[test]
fn test_invalid_format_leaves_existing_graph() {
    let mut graph = populated();
    let err = JsonImporter::new()
        .import_str(&mut graph, r#"{"other": 1}"#)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidFormat(_)));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_malformed_json_is_import_failed() {
    let mut graph = GraphStore::new();
    let err = JsonImporter::new()
        .import_str(&mut graph, r#"{"adj_list": {"A": [}"#)
        .unwrap_err();
    assert!(matches!(err, GraphError::ImportFailed(_)));
}

#[test]
fn test_unknown_target_fails_and_clears() {
    let mut graph = populated();
    let err = JsonImporter::new()
        .import_str(
            &mut graph,
            r#"{"adj_list": {"A": [{"to": "B"}], "B": [{"to": "ghost"}]}}"#,
        )
        .unwrap_err();

    match err {
        GraphError::ImportFailed(msg) => assert!(msg.contains("ghost")),
        other => panic!("Expected ImportFailed, got {:?}", other),
    }
    // destructive on attempt: old graph gone, no partial import left behind
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_consistent());
}

#[test]
fn test_bad_descriptor_fails_and_clears() {
    for doc in [
        r#"{"adj_list": {"A": [{"target": "A"}]}}"#,
        r#"{"adj_list": {"A": "B"}}"#,
        r#"{"adj_list": {"A": [{"to": 1}]}}"#,
    ] {
        let mut graph = populated();
        let err = JsonImporter::new().import_str(&mut graph, doc).unwrap_err();
        assert!(
            matches!(err, GraphError::ImportFailed(_)),
            "{doc}: got {err:?}"
        );
        assert!(graph.is_empty());
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut graph = populated();
    let err = JsonImporter::new()
        .import_file(&mut graph, &dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_unvalidated_default_weight_is_import_failed() {
    let config = StepperConfig {
        default_weight: 0.0,
        ..StepperConfig::default()
    };
    let mut graph = populated();
    let err = JsonImporter::from_config(&config)
        .import_str(&mut graph, r#"{"adj_list": {"A": [{"to": "B"}], "B": []}}"#)
        .unwrap_err();

    match err {
        GraphError::ImportFailed(msg) => assert!(msg.contains("'A' -> 'B'")),
        other => panic!("Expected ImportFailed, got {:?}", other),
    }
    assert!(graph.is_empty());
    assert!(graph.is_consistent());
}
