//! Graph algorithms module
//!
//! Algorithms read the graph through its public read-only surface and
//! never mutate it.

pub mod pathfinding;

pub use pathfinding::{dijkstra, PathResult};
