//! Pathfinding algorithms
//!
//! Single-pair shortest path over a [`Graph`] using Dijkstra's algorithm.
//! Weights are unsigned, so the non-negativity assumption always holds.

use crate::graph::{Distance, Graph, GraphResult, Label, VertexId, INFINITY};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// Result of a shortest path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: Label,
    pub target: Label,
    /// Total distance, or [`INFINITY`] when the target is unreachable
    pub cost: Distance,
    /// Labels from source to target; empty when unreachable
    pub path: Vec<Label>,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    pub fn into_parts(self) -> (Distance, Vec<Label>) {
        (self.cost, self.path)
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Distance,
    vertex: VertexId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Stops as soon as `end` is settled. Fails only when either label is
/// unknown.
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> GraphResult<PathResult> {
    let start_id = graph.resolve(start)?;
    let end_id = graph.resolve(end)?;

    let slots = graph.slot_count();
    let mut dist = vec![INFINITY; slots];
    let mut visited = vec![false; slots];
    let mut previous: Vec<Option<VertexId>> = vec![None; slots];
    let mut heap = BinaryHeap::new();

    dist[start_id.index()] = 0;
    heap.push(State { cost: 0, vertex: start_id });

    while let Some(State { cost, vertex }) = heap.pop() {
        let idx = vertex.index();
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        trace!("Settled {} at distance {}", vertex, cost);

        if vertex == end_id {
            break;
        }

        let Some(current) = graph.vertex_by_id(vertex) else {
            continue;
        };

        for (&next, &weight) in current.edges() {
            // Settled costs lie on simple paths, so the widened sum never overflows
            let next_cost = cost + Distance::from(weight);

            if next_cost < dist[next.index()] {
                dist[next.index()] = next_cost;
                previous[next.index()] = Some(vertex);
                heap.push(State { cost: next_cost, vertex: next });
            }
        }
    }

    let mut result = PathResult {
        source: Label::new(start),
        target: Label::new(end),
        cost: INFINITY,
        path: Vec::new(),
    };

    if !visited[end_id.index()] {
        return Ok(result);
    }

    // Reconstruct path
    let mut curr = Some(end_id);
    while let Some(id) = curr {
        if let Some(vertex) = graph.vertex_by_id(id) {
            result.path.push(vertex.label().clone());
        }
        curr = previous[id.index()];
    }
    result.path.reverse();
    result.cost = dist[end_id.index()];

    Ok(result)
}
