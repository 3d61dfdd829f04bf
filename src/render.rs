//! Human-readable text rendering
//!
//! Formats a graph and a shortest path result in the line-oriented shape
//! existing consumers expect:
//!
//! ```text
//! Vertices: A B C
//! Edges:
//!     A -> B (Weight: 1)
//! Shortest Path from A to C: A -> B -> C
//! Distance: 3
//! ```

use crate::algo::PathResult;
use crate::graph::Graph;
use std::fmt;

/// Displays the vertex list followed by every adjacency entry
pub struct GraphDisplay<'a>(pub &'a Graph);

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: ")?;
        for label in self.0.labels() {
            write!(f, "{} ", label)?;
        }
        writeln!(f)?;

        writeln!(f, "Edges: ")?;
        for (source, destination, weight) in self.0.adjacency_entries() {
            writeln!(f, "\t{} -> {} (Weight: {})", source, destination, weight)?;
        }
        Ok(())
    }
}

/// Displays a path line (or the no-path message) and the distance line
pub struct PathDisplay<'a>(pub &'a PathResult);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        if result.path.is_empty() {
            writeln!(
                f,
                "There is no valid path from {} to {}",
                result.source, result.target
            )?;
        } else {
            write!(f, "Shortest Path from {} to {}: ", result.source, result.target)?;
            writeln!(f, "{}", format_route(result))?;
        }
        writeln!(f, "Distance: {}", result.cost)
    }
}

/// `A -> B -> C`
pub fn format_route(result: &PathResult) -> String {
    result
        .path
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
