//! Core graph structure: node positions + directed weighted edges with adjacency indexes.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Serialize;

use crate::types::{validate_weight, Edge, GraphError, GraphResult, Node, NodeId, Position};

/// Everything the renderer needs to draw the current graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    /// Nodes in ascending id order.
    pub nodes: Vec<Node>,
    /// Edges grouped by source id, each group in insertion order.
    pub edges: Vec<Edge>,
}

/// The directed weighted graph plus the canvas position of every node.
///
/// The node set is the key set of `positions`. Every node also owns an entry in
/// `adjacency` and `reverse_adjacency`, possibly empty; all three maps are
/// updated together by each mutation.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Node ID -> canvas position.
    positions: BTreeMap<NodeId, Position>,
    /// Outgoing edges per source, in insertion order.
    adjacency: HashMap<NodeId, Vec<Edge>>,
    /// Sources with an edge into each target, in insertion order.
    reverse_adjacency: HashMap<NodeId, Vec<NodeId>>,
    /// Total number of edges.
    edge_count: usize,
    /// Next node ID to hand out.
    next_id: NodeId,
}

impl GraphStore {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
            adjacency: HashMap::new(),
            reverse_adjacency: HashMap::new(),
            edge_count: 0,
            next_id: 1,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether a node with this ID exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Canvas position of a node.
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// All nodes in ascending ID order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.positions
            .iter()
            .map(|(&id, &position)| Node { id, position })
    }

    /// All edges, grouped by ascending source ID, each group in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.positions
            .keys()
            .flat_map(move |id| self.edges_from(*id).iter())
    }

    /// Outgoing edges of a node in insertion order. Empty for unknown nodes.
    pub fn edges_from(&self, source: NodeId) -> &[Edge] {
        self.adjacency
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Incoming edges of a node, ordered by when their sources first linked to it.
    pub fn edges_to(&self, target: NodeId) -> Vec<&Edge> {
        let Some(sources) = self.reverse_adjacency.get(&target) else {
            return Vec::new();
        };
        sources
            .iter()
            .filter_map(|src| self.edges_from(*src).iter().find(|e| e.target == target))
            .collect()
    }

    /// Targets of the outgoing edges of a node, in edge insertion order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges_from(id).iter().map(|e| e.target)
    }

    /// Look up the edge for an ordered pair.
    pub fn get_edge(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.edges_from(source).iter().find(|e| e.target == target)
    }

    /// Whether the ordered pair has an edge.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.get_edge(source, target).is_some()
    }

    /// Weight of the edge for an ordered pair.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> GraphResult<f64> {
        self.get_edge(source, target)
            .map(|e| e.weight)
            .ok_or(GraphError::EdgeNotFound {
                from: source,
                to: target,
            })
    }

    /// Add a node at `position`, returns the assigned ID.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;

        self.positions.insert(id, position);
        self.adjacency.insert(id, Vec::new());
        self.reverse_adjacency.insert(id, Vec::new());

        debug!("added node {id} at {position}");
        id
    }

    /// Remove a node together with every edge that starts or ends at it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Position> {
        let position = self.positions.remove(&id).ok_or(GraphError::NotFound(id))?;

        let outgoing = self.adjacency.remove(&id).unwrap_or_default();
        let incoming = self.reverse_adjacency.remove(&id).unwrap_or_default();

        for edge in &outgoing {
            if let Some(sources) = self.reverse_adjacency.get_mut(&edge.target) {
                sources.retain(|src| *src != id);
            }
        }

        let mut removed = outgoing.len();
        for source in incoming.iter().filter(|src| **src != id) {
            if let Some(edges) = self.adjacency.get_mut(source) {
                let before = edges.len();
                edges.retain(|e| e.target != id);
                removed += before - edges.len();
            }
        }
        self.edge_count -= removed;

        debug!("removed node {id} and {removed} incident edges");
        Ok(position)
    }

    /// Move a node to a new canvas position. Topology is untouched.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> GraphResult<()> {
        let slot = self.positions.get_mut(&id).ok_or(GraphError::NotFound(id))?;
        *slot = position;
        Ok(())
    }

    /// Insert an edge, or overwrite the weight of an existing one in place.
    ///
    /// Returns the previous weight when the edge already existed.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> GraphResult<Option<f64>> {
        if !self.contains(source) {
            return Err(GraphError::NotFound(source));
        }
        if !self.contains(target) {
            return Err(GraphError::NotFound(target));
        }
        let weight = validate_weight(weight)?;

        let edges = self.adjacency.entry(source).or_default();
        if let Some(existing) = edges.iter_mut().find(|e| e.target == target) {
            let previous = existing.weight;
            existing.weight = weight;
            debug!("updated edge {source} -> {target}: {previous} -> {weight}");
            return Ok(Some(previous));
        }

        edges.push(Edge::new(source, target, weight));
        self.reverse_adjacency
            .entry(target)
            .or_default()
            .push(source);
        self.edge_count += 1;

        debug!("added edge {source} -> {target} ({weight})");
        Ok(None)
    }

    /// Remove the edge for an ordered pair. Absent edges are left alone.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> Option<Edge> {
        let edges = self.adjacency.get_mut(&source)?;
        let pos = edges.iter().position(|e| e.target == target)?;
        let removed = edges.remove(pos);

        if let Some(sources) = self.reverse_adjacency.get_mut(&target) {
            sources.retain(|src| *src != source);
        }
        self.edge_count -= 1;

        debug!("removed edge {source} -> {target}");
        Some(removed)
    }

    /// Drop every node, edge and position. Numbering restarts at 1.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.adjacency.clear();
        self.reverse_adjacency.clear();
        self.edge_count = 0;
        self.next_id = 1;
    }

    /// First node (lowest ID) whose position lies strictly within `radius` of `point`.
    pub fn node_at(&self, point: Position, radius: f64) -> Option<NodeId> {
        let limit = radius * radius;
        self.positions
            .iter()
            .find(|(_, pos)| pos.distance_squared(point) < limit)
            .map(|(&id, _)| id)
    }

    /// Copy out nodes and edges for rendering.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().collect(),
            edges: self.edges().copied().collect(),
        }
    }

    /// Verify that positions, adjacency and reverse adjacency describe the same graph.
    pub fn is_consistent(&self) -> bool {
        let same_keys = self.adjacency.len() == self.positions.len()
            && self.reverse_adjacency.len() == self.positions.len()
            && self.positions.keys().all(|id| {
                self.adjacency.contains_key(id) && self.reverse_adjacency.contains_key(id)
            });
        if !same_keys {
            return false;
        }

        let mut counted = 0;
        for (source, edges) in &self.adjacency {
            for edge in edges {
                counted += 1;
                if edge.source != *source || !self.contains(edge.target) {
                    return false;
                }
                let back = self
                    .reverse_adjacency
                    .get(&edge.target)
                    .is_some_and(|sources| sources.contains(source));
                if !back {
                    return false;
                }
            }
        }
        let reverse_total: usize = self.reverse_adjacency.values().map(Vec::len).sum();
        counted == self.edge_count
            && reverse_total == self.edge_count
            && self.positions.keys().all(|id| *id < self.next_id)
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
