//! In-memory graph storage implementation
//!
//! Vertices live in an arena of slots addressed by [`VertexId`]; a label
//! index maps each label to its slot. Every mutation keeps adjacency
//! symmetric: if A lists B with weight w, B lists A with weight w.

use super::types::{Label, VertexId, Weight};
use super::vertex::Vertex;
use crate::algo::pathfinding::{self, PathResult};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    DuplicateVertex(Label),

    #[error("Vertex {0} does not exist")]
    VertexNotFound(Label),

    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(Label),

    #[error("Edge {0} - {1} already exists")]
    EdgeExists(Label, Label),

    #[error("Edge {0} - {1} does not exist")]
    EdgeNotFound(Label, Label),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted undirected graph with label-addressed vertices
///
/// - slots: VertexId -> Vertex (arena, `None` marks a freed slot)
/// - index: Label -> VertexId (insertion ordered)
/// - free_ids: freed slots, reused by later insertions
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex arena
    slots: Vec<Option<Vertex>>,

    /// Label index
    index: IndexMap<Label, VertexId>,

    /// Free slot indices for reuse
    free_ids: Vec<usize>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            slots: Vec::new(),
            index: IndexMap::new(),
            free_ids: Vec::new(),
        }
    }

    /// Add a vertex with an empty adjacency
    pub fn add_vertex(&mut self, label: impl Into<Label>) -> GraphResult<VertexId> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }

        let id = match self.free_ids.pop() {
            Some(idx) => VertexId::new(idx),
            None => {
                self.slots.push(None);
                VertexId::new(self.slots.len() - 1)
            }
        };

        self.slots[id.index()] = Some(Vertex::new(id, label.clone()));
        debug!("Added vertex {} at {}", label, id);
        self.index.insert(label, id);
        Ok(id)
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns `false` (and changes nothing) if the label is unknown.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(id) = self.index.shift_remove(label) else {
            return false;
        };
        let Some(mut vertex) = self.slots[id.index()].take() else {
            return false;
        };

        let edges = vertex.take_edges();
        for neighbor in edges.keys() {
            if let Some(adjacent) = self.slot_mut(*neighbor) {
                adjacent.remove_edge(id);
            }
        }
        self.free_ids.push(id.index());

        debug!("Removed vertex {} ({} incident edges)", label, edges.len());
        true
    }

    /// Add an undirected edge between two distinct, unconnected vertices
    pub fn add_edge(&mut self, label1: &str, label2: &str, weight: Weight) -> GraphResult<()> {
        let id1 = self.resolve(label1)?;
        let id2 = self.resolve(label2)?;

        if id1 == id2 {
            return Err(GraphError::SelfLoop(Label::new(label1)));
        }

        if self.connected(id1, id2) {
            return Err(GraphError::EdgeExists(Label::new(label1), Label::new(label2)));
        }

        if let Some(v1) = self.slot_mut(id1) {
            v1.add_edge(id2, weight);
        }
        if let Some(v2) = self.slot_mut(id2) {
            v2.add_edge(id1, weight);
        }

        debug!("Added edge {} - {} (weight {})", label1, label2, weight);
        Ok(())
    }

    /// Remove the undirected edge between two vertices
    pub fn remove_edge(&mut self, label1: &str, label2: &str) -> GraphResult<()> {
        let id1 = self.resolve(label1)?;
        let id2 = self.resolve(label2)?;

        if !self.connected(id1, id2) {
            return Err(GraphError::EdgeNotFound(Label::new(label1), Label::new(label2)));
        }

        if let Some(v1) = self.slot_mut(id1) {
            v1.remove_edge(id2);
        }
        if let Some(v2) = self.slot_mut(id2) {
            v2.remove_edge(id1);
        }

        debug!("Removed edge {} - {}", label1, label2);
        Ok(())
    }

    /// Shortest path between two vertices (Dijkstra)
    ///
    /// An unreachable target is not an error: the result carries
    /// [`INFINITY`](super::INFINITY) and an empty path.
    pub fn shortest_path(&self, start: &str, end: &str) -> GraphResult<PathResult> {
        pathfinding::dijkstra(self, start, end)
    }

    /// Look up the handle for a label
    pub fn resolve(&self, label: &str) -> GraphResult<VertexId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(Label::new(label)))
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label).and_then(|id| self.vertex_by_id(*id))
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Check for an edge between two labels (false if either is missing)
    pub fn has_edge(&self, label1: &str, label2: &str) -> bool {
        match (self.index.get(label1), self.index.get(label2)) {
            (Some(id1), Some(id2)) => self.connected(*id1, *id2),
            _ => false,
        }
    }

    pub fn edge_weight(&self, label1: &str, label2: &str) -> Option<Weight> {
        let id2 = *self.index.get(label2)?;
        self.vertex(label1)?.weight_to(id2)
    }

    /// Neighbors of a vertex with their edge weights
    pub fn neighbors(&self, label: &str) -> GraphResult<Vec<(&Label, Weight)>> {
        let id = self.resolve(label)?;
        let Some(vertex) = self.vertex_by_id(id) else {
            return Err(GraphError::VertexNotFound(Label::new(label)));
        };

        Ok(vertex
            .edges()
            .iter()
            .filter_map(|(neighbor, weight)| {
                self.vertex_by_id(*neighbor).map(|v| (v.label(), *weight))
            })
            .collect())
    }

    /// Vertex labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.index.keys()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.index.values().filter_map(|id| self.vertex_by_id(*id))
    }

    /// Every adjacency entry as (source, destination, weight).
    ///
    /// Each undirected edge is reported once from each endpoint.
    pub fn adjacency_entries(&self) -> impl Iterator<Item = (&Label, &Label, Weight)> + '_ {
        self.vertices().flat_map(move |vertex| {
            vertex.edges().iter().filter_map(move |(neighbor, weight)| {
                self.vertex_by_id(*neighbor)
                    .map(|n| (vertex.label(), n.label(), *weight))
            })
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.vertices().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Remove all vertices and edges
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free_ids.clear();
    }

    /// Number of arena slots, including freed ones
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn connected(&self, id1: VertexId, id2: VertexId) -> bool {
        let forward = self.vertex_by_id(id1).is_some_and(|v| v.has_edge(id2));
        let backward = self.vertex_by_id(id2).is_some_and(|v| v.has_edge(id1));
        forward || backward
    }
}
