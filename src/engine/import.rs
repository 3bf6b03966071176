//! Adjacency-list JSON import.
//!
//! Document shape: `{ "<key>": { "<node>": [ { "to": "<node>" }, ... ], ... } }`.
//! Node names are renumbered 1, 2, 3, ... in document order; edge weights in
//! the document are ignored and every edge gets the default weight.

use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use serde_json::{Map, Value};

use crate::config::{LayoutConfig, StepperConfig};
use crate::graph::GraphStore;
use crate::types::{
    GraphError, GraphResult, NodeId, DEFAULT_ADJACENCY_KEY, DEFAULT_WEIGHT,
};

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    /// Number of nodes created.
    pub node_count: usize,
    /// Number of distinct edges created.
    pub edge_count: usize,
    /// Document node name -> assigned ID, in document order.
    pub mapping: Vec<(String, NodeId)>,
    index: HashMap<String, NodeId>,
}

impl ImportSummary {
    /// ID assigned to a document node name.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }
}

/// Replaces the contents of a graph store with an adjacency-list document.
#[derive(Debug, Clone)]
pub struct JsonImporter {
    adjacency_key: String,
    default_weight: f64,
    layout: LayoutConfig,
}

impl JsonImporter {
    /// Create an importer with the built-in defaults.
    pub fn new() -> Self {
        Self {
            adjacency_key: DEFAULT_ADJACENCY_KEY.to_string(),
            default_weight: DEFAULT_WEIGHT,
            layout: LayoutConfig::default(),
        }
    }

    /// Create an importer using the configured key, weight and layout.
    pub fn from_config(config: &StepperConfig) -> Self {
        Self {
            adjacency_key: config.adjacency_key.clone(),
            default_weight: config.default_weight,
            layout: config.layout,
        }
    }

    /// Read and import a document from disk.
    pub fn import_file(&self, graph: &mut GraphStore, path: &Path) -> GraphResult<ImportSummary> {
        let content = std::fs::read_to_string(path)?;
        let summary = self.import_str(graph, &content)?;
        info!(
            "Graph loaded from {} with {} nodes and {} edges",
            path.display(),
            summary.node_count,
            summary.edge_count
        );
        Ok(summary)
    }

    /// Import a document held in memory.
    ///
    /// Syntax errors and a missing or empty adjacency key are detected before
    /// the store is touched. After that the store is cleared; if building the
    /// new graph fails it is cleared again, so no partial graph survives and
    /// the previous graph is not restored.
    pub fn import_str(&self, graph: &mut GraphStore, content: &str) -> GraphResult<ImportSummary> {
        let document: Value = serde_json::from_str(content)
            .map_err(|e| GraphError::ImportFailed(format!("malformed JSON: {e}")))?;
        self.import_value(graph, &document)
    }

    /// Import an already parsed document.
    pub fn import_value(
        &self,
        graph: &mut GraphStore,
        document: &Value,
    ) -> GraphResult<ImportSummary> {
        let adjacency = self.adjacency_of(document)?;

        graph.clear();
        match self.build(graph, adjacency) {
            Ok(summary) => Ok(summary),
            Err(e) => {
                warn!("import aborted, graph left empty: {e}");
                graph.clear();
                Err(e)
            }
        }
    }

    fn adjacency_of<'v>(&self, document: &'v Value) -> GraphResult<&'v Map<String, Value>> {
        let key = &self.adjacency_key;
        let Some(root) = document.as_object() else {
            return Err(GraphError::InvalidFormat(
                "document must be a JSON object".into(),
            ));
        };
        match root.get(key) {
            None | Some(Value::Null) => Err(GraphError::InvalidFormat(format!(
                "'{key}' key not found"
            ))),
            Some(Value::Object(map)) if map.is_empty() => {
                Err(GraphError::InvalidFormat(format!("'{key}' is empty")))
            }
            Some(Value::Object(map)) => Ok(map),
            Some(other) => Err(GraphError::InvalidFormat(format!(
                "'{key}' must map node names to edge lists, got {}",
                json_kind(other)
            ))),
        }
    }

    fn build(
        &self,
        graph: &mut GraphStore,
        adjacency: &Map<String, Value>,
    ) -> GraphResult<ImportSummary> {
        let mut ids: HashMap<&str, NodeId> = HashMap::with_capacity(adjacency.len());
        for (index, name) in adjacency.keys().enumerate() {
            let id = graph.add_node(self.layout.position_of(index));
            ids.insert(name.as_str(), id);
        }
        let resolve = |name: &str| ids.get(name).copied();

        for (name, descriptors) in adjacency {
            let source = resolve(name).ok_or_else(|| {
                GraphError::ImportFailed(format!("node '{name}' has no assigned id"))
            })?;
            let descriptors = descriptors.as_array().ok_or_else(|| {
                GraphError::ImportFailed(format!(
                    "edges of '{name}' must be a list, got {}",
                    json_kind(descriptors)
                ))
            })?;
            for descriptor in descriptors {
                let to = descriptor
                    .get("to")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        GraphError::ImportFailed(format!(
                            "edge of '{name}' has no string 'to' field: {descriptor}"
                        ))
                    })?;
                let target = resolve(to).ok_or_else(|| {
                    GraphError::ImportFailed(format!("edge '{name}' -> '{to}' names an unknown node"))
                })?;
                graph
                    .add_edge(source, target, self.default_weight)
                    .map_err(|e| {
                        GraphError::ImportFailed(format!("edge '{name}' -> '{to}': {e}"))
                    })?;
            }
        }

        let mapping: Vec<(String, NodeId)> = adjacency
            .keys()
            .filter_map(|name| resolve(name).map(|id| (name.clone(), id)))
            .collect();
        let index = mapping.iter().cloned().collect();
        Ok(ImportSummary {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            mapping,
            index,
        })
    }
}

impl Default for JsonImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
