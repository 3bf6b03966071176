//! The directed, weighted edge.

use serde::Serialize;

use super::NodeId;

/// A directed edge between two nodes. At most one exists per ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Source node ID.
    pub source: NodeId,
    /// Target node ID.
    pub target: NodeId,
    /// Positive edge weight.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// True when source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
