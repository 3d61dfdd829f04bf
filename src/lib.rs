//! Labelgraph
//!
//! An in-memory weighted undirected graph with label-addressed vertices
//! and single-pair shortest path queries (Dijkstra).
//!
//! # Model
//!
//! - Vertices are identified by unique string labels
//! - Edges are undirected, weighted with unsigned integers
//! - No self-loops, no parallel edges
//! - Adjacency is symmetric after every mutation
//! - Unreachable targets yield [`INFINITY`] and an empty path
//!
//! ## Example Usage
//!
//! ```rust
//! use labelgraph::{Graph, INFINITY};
//!
//! let mut graph = Graph::new();
//! for label in ["A", "B", "C", "D"] {
//!     graph.add_vertex(label).unwrap();
//! }
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("B", "C", 2).unwrap();
//! graph.add_edge("A", "C", 4).unwrap();
//!
//! let result = graph.shortest_path("A", "C").unwrap();
//! assert_eq!(result.cost, 3);
//! assert_eq!(result.path, vec!["A", "B", "C"]);
//!
//! let unreachable = graph.shortest_path("A", "D").unwrap();
//! assert_eq!(unreachable.cost, INFINITY);
//! assert!(unreachable.path.is_empty());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod render;
pub mod scenario;

// Re-export main types for convenience
pub use graph::{
    Adjacency, Distance, Graph, GraphError, GraphResult, Label, Vertex, VertexId, Weight,
    INFINITY,
};

pub use algo::{dijkstra, PathResult};

pub use render::{GraphDisplay, PathDisplay};

pub use scenario::{
    EdgeSpec, QuerySpec, Scenario, ScenarioError, ScenarioOutcome, ScenarioResult, ScenarioSet,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
