//! Fluent API for building GraphStore instances.

use crate::types::{GraphResult, NodeId, Position, DEFAULT_POSITION, DEFAULT_WEIGHT};

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// IDs are handed out exactly as a fresh store would (1, 2, 3, ...), so the
/// values returned while building are valid in the built graph.
pub struct GraphBuilder {
    positions: Vec<Position>,
    edges: Vec<(NodeId, NodeId, f64)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node at a position.
    pub fn add_node_at(&mut self, position: Position) -> NodeId {
        self.positions.push(position);
        self.positions.len() as NodeId
    }

    /// Add a node at the default position.
    pub fn add_node(&mut self) -> NodeId {
        self.add_node_at(DEFAULT_POSITION)
    }

    /// Add `count` nodes at the default position, returns their IDs.
    pub fn add_nodes(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Add an edge with the default weight.
    pub fn link(&mut self, source: NodeId, target: NodeId) -> &mut Self {
        self.link_weighted(source, target, DEFAULT_WEIGHT)
    }

    /// Add an edge with an explicit weight.
    pub fn link_weighted(&mut self, source: NodeId, target: NodeId, weight: f64) -> &mut Self {
        self.edges.push((source, target, weight));
        self
    }

    /// Build the final GraphStore. Fails if an edge names an unknown node or a bad weight.
    pub fn build(self) -> GraphResult<GraphStore> {
        let mut graph = GraphStore::new();
        for position in self.positions {
            graph.add_node(position);
        }
        for (source, target, weight) in self.edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
