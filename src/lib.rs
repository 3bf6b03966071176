//! graph-stepper: directed weighted graph editing with step-by-step traversal playback.
//!
//! A [`GraphStore`] owns nodes, canvas positions and edges. [`MutationService`]
//! and [`JsonImporter`] write into it; [`TraversalEngine`] reads it and yields
//! BFS/DFS visit events lazily so a renderer can replay them at its own pace.

pub mod cli;
pub mod config;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{LayoutConfig, StepperConfig};
pub use engine::{ImportSummary, JsonImporter, MutationService, TraversalEngine};
pub use graph::{Bfs, Dfs, GraphBuilder, GraphSnapshot, GraphStore, Traversal};
pub use types::{
    Edge, GraphError, GraphResult, Node, NodeId, Position, TraversalKind, VisitEvent,
    DEFAULT_ADJACENCY_KEY, DEFAULT_HIT_RADIUS, DEFAULT_POSITION, DEFAULT_WEIGHT,
};
