//! Traversal entry point: validates the start node and hands back a lazy visit sequence.

use log::{debug, warn};

use crate::graph::{Bfs, Dfs, GraphStore, Traversal};
use crate::types::{GraphError, GraphResult, NodeId, TraversalKind};

/// Starts BFS and DFS traversals over a graph store.
///
/// The returned iterators borrow the store, so a traversal always sees one
/// consistent graph. Pacing is up to whoever pulls the events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalEngine;

impl TraversalEngine {
    /// Create a new traversal engine.
    pub fn new() -> Self {
        Self
    }

    /// Breadth-first traversal from `start`.
    pub fn bfs<'a>(&self, graph: &'a GraphStore, start: Option<NodeId>) -> GraphResult<Bfs<'a>> {
        let start = self.check_start(graph, TraversalKind::Breadth, start)?;
        Bfs::new(graph, start)
    }

    /// Depth-first traversal from `start`.
    pub fn dfs<'a>(&self, graph: &'a GraphStore, start: Option<NodeId>) -> GraphResult<Dfs<'a>> {
        let start = self.check_start(graph, TraversalKind::Depth, start)?;
        Dfs::new(graph, start)
    }

    /// Traversal of the given kind from `start`.
    pub fn run<'a>(
        &self,
        graph: &'a GraphStore,
        kind: TraversalKind,
        start: Option<NodeId>,
    ) -> GraphResult<Traversal<'a>> {
        let start = self.check_start(graph, kind, start)?;
        Traversal::new(graph, kind, start)
    }

    /// Run a traversal to completion and return the visited node IDs in order.
    pub fn visit_order(
        &self,
        graph: &GraphStore,
        kind: TraversalKind,
        start: Option<NodeId>,
    ) -> GraphResult<Vec<NodeId>> {
        Ok(self.run(graph, kind, start)?.map(|event| event.node).collect())
    }

    fn check_start(
        &self,
        graph: &GraphStore,
        kind: TraversalKind,
        start: Option<NodeId>,
    ) -> GraphResult<NodeId> {
        let Some(start) = start else {
            warn!("{kind}: no start node given");
            return Err(GraphError::InvalidArgument(
                "a start node is required".into(),
            ));
        };
        if !graph.contains(start) {
            warn!("{kind}: start node {start} is not in the graph");
            return Err(GraphError::InvalidArgument(format!(
                "start node {start} is not in the graph"
            )));
        }
        debug!("{kind}: starting at node {start}");
        Ok(start)
    }
}
