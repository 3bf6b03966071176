//! User-initiated edits: a validating layer over the graph store.

use log::{debug, warn};

use crate::config::StepperConfig;
use crate::graph::GraphStore;
use crate::types::{
    validate_weight, GraphError, GraphResult, NodeId, Position, DEFAULT_POSITION, DEFAULT_WEIGHT,
};

/// Validates edits before they reach the store so a rejected edit changes nothing.
#[derive(Debug, Clone)]
pub struct MutationService {
    default_position: Position,
    default_weight: f64,
}

impl MutationService {
    /// Create a mutation service with the built-in defaults.
    pub fn new() -> Self {
        Self {
            default_position: DEFAULT_POSITION,
            default_weight: DEFAULT_WEIGHT,
        }
    }

    /// Create a mutation service using the configured defaults.
    pub fn from_config(config: &StepperConfig) -> Self {
        Self {
            default_position: config.default_position,
            default_weight: config.default_weight,
        }
    }

    /// Weight applied when `add_edge` gets none.
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Create a node, at the default position when none is given.
    pub fn add_node(&self, graph: &mut GraphStore, position: Option<Position>) -> NodeId {
        graph.add_node(position.unwrap_or(self.default_position))
    }

    /// Delete a node and all of its edges.
    pub fn remove_node(&self, graph: &mut GraphStore, id: NodeId) -> GraphResult<Position> {
        if !graph.contains(id) {
            warn!("remove_node: node {id} does not exist");
            return Err(GraphError::NotFound(id));
        }
        graph.remove_node(id)
    }

    /// Create or overwrite the edge `source -> target`.
    ///
    /// Both endpoints and the weight are checked before the store is touched.
    /// Returns the previous weight when an existing edge was overwritten.
    pub fn add_edge(
        &self,
        graph: &mut GraphStore,
        source: NodeId,
        target: NodeId,
        weight: Option<f64>,
    ) -> GraphResult<Option<f64>> {
        for id in [source, target] {
            if !graph.contains(id) {
                warn!("add_edge: one or both nodes ({source}, {target}) do not exist");
                return Err(GraphError::NotFound(id));
            }
        }
        let weight = validate_weight(weight.unwrap_or(self.default_weight))?;
        graph.add_edge(source, target, weight)
    }

    /// Delete the edge `source -> target`. Returns whether an edge was removed.
    pub fn remove_edge(&self, graph: &mut GraphStore, source: NodeId, target: NodeId) -> bool {
        let removed = graph.remove_edge(source, target).is_some();
        if !removed {
            debug!("remove_edge: no edge {source} -> {target}, nothing to do");
        }
        removed
    }

    /// Move a node on the canvas.
    pub fn move_node(
        &self,
        graph: &mut GraphStore,
        id: NodeId,
        position: Position,
    ) -> GraphResult<()> {
        graph.move_node(id, position)
    }
}

impl Default for MutationService {
    fn default() -> Self {
        Self::new()
    }
}
