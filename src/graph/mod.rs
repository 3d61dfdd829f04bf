//! Core graph implementation
//!
//! This module implements the weighted undirected graph model:
//! - Vertices addressed by unique string labels
//! - Undirected edges with non-negative integer weights
//! - At most one edge per vertex pair, no self-loops
//! - Arena storage with stable vertex handles

pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use store::{Graph, GraphError, GraphResult};
pub use types::{Distance, Label, VertexId, Weight, INFINITY};
pub use vertex::{Adjacency, Vertex};
