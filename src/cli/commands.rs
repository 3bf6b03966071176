//! CLI command implementations.

use std::path::Path;
use std::time::Duration;

use crate::config::StepperConfig;
use crate::engine::{JsonImporter, TraversalEngine};
use crate::graph::GraphStore;
use crate::types::{GraphResult, NodeId, TraversalKind, VisitEvent};

/// Import a document and print the resulting graph.
pub fn cmd_show(path: &Path, config: &StepperConfig, json: bool) -> GraphResult<()> {
    let mut graph = GraphStore::new();
    let summary = JsonImporter::from_config(config).import_file(&mut graph, path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "mapping": summary
                .mapping
                .iter()
                .map(|(name, id)| serde_json::json!({"name": name, "id": id}))
                .collect::<Vec<_>>(),
            "graph": graph.snapshot(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        for (name, id) in &summary.mapping {
            println!("  {name} => {id}");
        }
        print_graph(&graph);
    }
    Ok(())
}

/// Import a document, then play a traversal back one event at a time.
pub fn cmd_traverse(
    path: &Path,
    kind: TraversalKind,
    start_id: NodeId,
    delay: Duration,
    config: &StepperConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphStore::new();
    JsonImporter::from_config(config).import_file(&mut graph, path)?;
    play(&graph, kind, start_id, delay, json)
}

/// Pull visit events and print each, pausing `delay` between them.
pub fn play(
    graph: &GraphStore,
    kind: TraversalKind,
    start_id: NodeId,
    delay: Duration,
    json: bool,
) -> GraphResult<()> {
    let traversal = TraversalEngine::new().run(graph, kind, Some(start_id))?;
    for event in traversal {
        if event.step > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        print_event(&event, json);
    }
    Ok(())
}

/// Print one visit event.
pub fn print_event(event: &VisitEvent, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "step": event.step,
                "node": event.node,
                "parent": event.parent,
                "depth": event.depth,
                "kind": event.kind.name(),
                "highlight": event.highlight(),
            })
        );
    } else {
        let indent = "  ".repeat(event.depth as usize);
        match event.parent {
            Some(parent) => println!(
                "{indent}[{} step {}] Node {} (from {parent}, {})",
                event.kind,
                event.step,
                event.node,
                event.highlight()
            ),
            None => println!(
                "{indent}[{} step {}] Node {} (start, {})",
                event.kind,
                event.step,
                event.node,
                event.highlight()
            ),
        }
    }
}

/// Print nodes with positions and edges with weights.
pub fn print_graph(graph: &GraphStore) {
    println!("Nodes: {}", graph.node_count());
    for node in graph.nodes() {
        println!("  {} at {}", node.id, node.position);
    }
    println!("Edges: {}", graph.edge_count());
    for edge in graph.edges() {
        println!("  {} -> {} (weight {})", edge.source, edge.target, edge.weight);
    }
}
