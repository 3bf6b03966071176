//! Visit events emitted by traversals.

use serde::Serialize;

use super::NodeId;

/// Which traversal produced a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    /// Breadth-first, level order.
    Breadth,
    /// Depth-first, pre-order.
    Depth,
}

impl TraversalKind {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }

    /// Parse a traversal kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Breadth),
            "dfs" | "depth" => Some(Self::Depth),
            _ => None,
        }
    }

    /// Colour the renderer paints a visited node with.
    pub fn highlight(&self) -> &'static str {
        match self {
            Self::Breadth => "green",
            Self::Depth => "orange",
        }
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One step of a traversal: a node has just been discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitEvent {
    /// 0-based position in the visit sequence.
    pub step: usize,
    /// The node being visited.
    pub node: NodeId,
    /// The node whose adjacency led here. `None` for the start node.
    pub parent: Option<NodeId>,
    /// Number of hops from the start along the discovering path.
    pub depth: u32,
    /// Traversal that emitted the event; decides the highlight role.
    pub kind: TraversalKind,
}

impl VisitEvent {
    /// Colour the renderer paints this node with.
    pub fn highlight(&self) -> &'static str {
        self.kind.highlight()
    }
}
