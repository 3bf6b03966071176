//! Lazy graph traversals (BFS, DFS) yielding one visit event per discovered node.
//!
//! Both iterators borrow the store immutably, so the graph cannot change while a
//! traversal is being consumed. Visited state lives in the iterator; dropping it
//! is the only cancellation needed.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId, TraversalKind, VisitEvent};

use super::GraphStore;

fn require_start(graph: &GraphStore, start: NodeId) -> GraphResult<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument(format!(
            "start node {start} is not in the graph"
        )))
    }
}

/// Breadth-first traversal in level order.
///
/// A node is marked visited when it is dequeued, not when it is enqueued, so
/// the queue may briefly hold duplicates; only the first dequeue emits.
pub struct Bfs<'a> {
    graph: &'a GraphStore,
    /// (node, discovering parent, depth)
    queue: VecDeque<(NodeId, Option<NodeId>, u32)>,
    visited: HashSet<NodeId>,
    step: usize,
}

impl<'a> Bfs<'a> {
    /// Start a BFS at `start`. Fails with `InvalidArgument` if the node is absent.
    pub fn new(graph: &'a GraphStore, start: NodeId) -> GraphResult<Self> {
        require_start(graph, start)?;
        let mut queue = VecDeque::new();
        queue.push_back((start, None, 0));
        Ok(Self {
            graph,
            queue,
            visited: HashSet::new(),
            step: 0,
        })
    }
}

impl Iterator for Bfs<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        while let Some((node, parent, depth)) = self.queue.pop_front() {
            if !self.visited.insert(node) {
                continue;
            }
            for neighbor in self.graph.neighbors(node) {
                if !self.visited.contains(&neighbor) {
                    self.queue.push_back((neighbor, Some(node), depth + 1));
                }
            }
            let event = VisitEvent {
                step: self.step,
                node,
                parent,
                depth,
                kind: TraversalKind::Breadth,
            };
            self.step += 1;
            return Some(event);
        }
        None
    }
}

struct Frame {
    node: NodeId,
    /// Index of the next outgoing edge to try.
    next: usize,
    depth: u32,
}

/// Depth-first pre-order traversal driven by an explicit stack.
///
/// Each frame resumes its neighbor scan where it left off and checks the
/// visited set at the moment a neighbor is reached, which matches recursive
/// DFS exactly without using the call stack.
pub struct Dfs<'a> {
    graph: &'a GraphStore,
    stack: Vec<Frame>,
    visited: HashSet<NodeId>,
    pending_start: Option<NodeId>,
    step: usize,
}

impl<'a> Dfs<'a> {
    /// Start a DFS at `start`. Fails with `InvalidArgument` if the node is absent.
    pub fn new(graph: &'a GraphStore, start: NodeId) -> GraphResult<Self> {
        require_start(graph, start)?;
        Ok(Self {
            graph,
            stack: Vec::new(),
            visited: HashSet::new(),
            pending_start: Some(start),
            step: 0,
        })
    }

    fn enter(&mut self, node: NodeId, parent: Option<NodeId>, depth: u32) -> VisitEvent {
        self.visited.insert(node);
        self.stack.push(Frame {
            node,
            next: 0,
            depth,
        });
        let event = VisitEvent {
            step: self.step,
            node,
            parent,
            depth,
            kind: TraversalKind::Depth,
        };
        self.step += 1;
        event
    }
}

impl Iterator for Dfs<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        if let Some(start) = self.pending_start.take() {
            return Some(self.enter(start, None, 0));
        }

        let graph = self.graph;
        while let Some(frame) = self.stack.last_mut() {
            let edges = graph.edges_from(frame.node);
            let mut found = None;
            while frame.next < edges.len() {
                let target = edges[frame.next].target;
                frame.next += 1;
                if !self.visited.contains(&target) {
                    found = Some((target, frame.node, frame.depth + 1));
                    break;
                }
            }
            match found {
                Some((node, parent, depth)) => return Some(self.enter(node, Some(parent), depth)),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Either traversal behind one iterator type.
pub enum Traversal<'a> {
    Breadth(Bfs<'a>),
    Depth(Dfs<'a>),
}

impl<'a> Traversal<'a> {
    /// Start a traversal of the given kind at `start`.
    pub fn new(graph: &'a GraphStore, kind: TraversalKind, start: NodeId) -> GraphResult<Self> {
        Ok(match kind {
            TraversalKind::Breadth => Self::Breadth(Bfs::new(graph, start)?),
            TraversalKind::Depth => Self::Depth(Dfs::new(graph, start)?),
        })
    }

    /// Which traversal this is.
    pub fn kind(&self) -> TraversalKind {
        match self {
            Self::Breadth(_) => TraversalKind::Breadth,
            Self::Depth(_) => TraversalKind::Depth,
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        match self {
            Self::Breadth(bfs) => bfs.next(),
            Self::Depth(dfs) => dfs.next(),
        }
    }
}
