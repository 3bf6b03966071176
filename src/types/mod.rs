//! All data types for the graph-stepper library.

pub mod edge;
pub mod error;
pub mod event;
pub mod node;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use event::{TraversalKind, VisitEvent};
pub use node::{Node, NodeId, Position};

/// Weight given to edges created without an explicit weight (including every imported edge).
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Where a node lands when it is added without coordinates.
pub const DEFAULT_POSITION: Position = Position { x: 100.0, y: 100.0 };

/// Left end of the line the importer lays nodes out on.
pub const DEFAULT_LAYOUT_ORIGIN: Position = Position { x: 100.0, y: 100.0 };

/// Horizontal distance between consecutive imported nodes.
pub const DEFAULT_LAYOUT_SPACING: f64 = 50.0;

/// Radius within which a point selects a node on the canvas.
pub const DEFAULT_HIT_RADIUS: f64 = 20.0;

/// Top-level key of the adjacency-list document.
pub const DEFAULT_ADJACENCY_KEY: &str = "adj_list";

/// Check that an edge weight is usable: finite and strictly positive.
pub fn validate_weight(weight: f64) -> GraphResult<f64> {
    if weight.is_finite() && weight > 0.0 {
        Ok(weight)
    } else {
        Err(GraphError::InvalidArgument(format!(
            "edge weight must be a positive number, got {weight}"
        )))
    }
}
