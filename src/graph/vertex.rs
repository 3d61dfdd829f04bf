//! Vertex implementation
//!
//! A vertex owns its label and its weighted adjacency. Neighbors are
//! referenced by [`VertexId`] handles; the owning [`Graph`](super::Graph)
//! is the only component that mutates adjacency.

use super::types::{Label, VertexId, Weight};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Neighbor handle -> edge weight, in insertion order
pub type Adjacency = IndexMap<VertexId, Weight, FxBuildHasher>;

/// A labeled vertex in the graph
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Slot this vertex occupies in its graph
    id: VertexId,

    /// Immutable label
    label: Label,

    /// Outgoing adjacency (mirrored on every neighbor)
    edges: Adjacency,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: impl Into<Label>) -> Self {
        Vertex {
            id,
            label: label.into(),
            edges: Adjacency::default(),
        }
    }

    /// Insert or overwrite the adjacency entry for `neighbor`.
    ///
    /// No self-loop or duplicate checks happen here; the graph validates
    /// before calling.
    pub(crate) fn add_edge(&mut self, neighbor: VertexId, weight: Weight) {
        self.edges.insert(neighbor, weight);
    }

    /// Remove the adjacency entry for `neighbor`, if any.
    pub(crate) fn remove_edge(&mut self, neighbor: VertexId) -> Option<Weight> {
        self.edges.shift_remove(&neighbor)
    }

    pub(crate) fn take_edges(&mut self) -> Adjacency {
        std::mem::take(&mut self.edges)
    }

    /// Check whether an adjacency entry exists for `neighbor`
    pub fn has_edge(&self, neighbor: VertexId) -> bool {
        self.edges.contains_key(&neighbor)
    }

    /// Weight of the edge to `neighbor`
    pub fn weight_to(&self, neighbor: VertexId) -> Option<Weight> {
        self.edges.get(&neighbor).copied()
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Read-only view of the adjacency
    pub fn edges(&self) -> &Adjacency {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.label == other.label
    }
}

impl Eq for Vertex {}
