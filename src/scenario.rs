//! Declarative graph scenarios
//!
//! A scenario names a vertex list, an edge list and an optional
//! shortest-path query. Scenario sets are loaded from YAML or JSON files:
//!
//! ```yaml
//! scenarios:
//!   - name: triangle
//!     vertices: [A, B, C]
//!     edges:
//!       - [A, B, 1]
//!       - { from: B, to: C, weight: 2 }
//!     query: { from: A, to: C }
//! ```

use crate::algo::PathResult;
use crate::graph::{Graph, GraphError, GraphResult, Label, Weight};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading or running scenarios
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported scenario file format: {0}")]
    UnsupportedFormat(String),

    #[error("Scenario {0} not found")]
    NotFound(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// An undirected weighted edge between two labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EdgeRepr")]
pub struct EdgeSpec {
    pub from: Label,
    pub to: Label,
    pub weight: Weight,
}

/// Accepts both `[A, B, 7]` and `{ from: A, to: B, weight: 7 }`
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeRepr {
    Tuple(Label, Label, Weight),
    Named { from: Label, to: Label, weight: Weight },
}

impl From<EdgeRepr> for EdgeSpec {
    fn from(repr: EdgeRepr) -> Self {
        match repr {
            EdgeRepr::Tuple(from, to, weight) | EdgeRepr::Named { from, to, weight } => {
                EdgeSpec { from, to, weight }
            }
        }
    }
}

impl EdgeSpec {
    pub fn new(from: impl Into<Label>, to: impl Into<Label>, weight: Weight) -> Self {
        EdgeSpec {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Shortest path query between two labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub from: Label,
    pub to: Label,
}

/// A named graph definition with an optional query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub vertices: Vec<Label>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub query: Option<QuerySpec>,
}

/// Result of running a scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub graph: Graph,
    /// The query that was asked, kept so failed queries can still be reported
    pub request: Option<QuerySpec>,
    /// `None` when the scenario has no query
    pub query: Option<GraphResult<PathResult>>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Scenario {
            name: name.into(),
            vertices: Vec::new(),
            edges: Vec::new(),
            query: None,
        }
    }

    pub fn with_vertices<I, L>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.vertices.extend(vertices.into_iter().map(Into::into));
        self
    }

    pub fn with_edge(mut self, from: &str, to: &str, weight: Weight) -> Self {
        self.edges.push(EdgeSpec::new(from, to, weight));
        self
    }

    pub fn with_query(mut self, from: &str, to: &str) -> Self {
        self.query = Some(QuerySpec {
            from: Label::new(from),
            to: Label::new(to),
        });
        self
    }

    /// Build the graph: all vertices first, then all edges
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone())?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.weight)?;
        }
        debug!(
            "Built scenario {}: {} vertices, {} edges",
            self.name,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build the graph and answer the query, if any.
    ///
    /// Construction failures abort; a failing query is reported inside
    /// the outcome.
    pub fn run(&self) -> GraphResult<ScenarioOutcome> {
        let graph = self.build()?;
        let query = self
            .query
            .as_ref()
            .map(|q| graph.shortest_path(q.from.as_str(), q.to.as_str()));

        Ok(ScenarioOutcome {
            name: self.name.clone(),
            graph,
            request: self.query.clone(),
            query,
        })
    }
}

/// An ordered collection of scenarios
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Load a scenario set, choosing the parser by file extension
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let set: ScenarioSet = match extension.as_str() {
            "yaml" | "yml" => {
                let reader = BufReader::new(File::open(path)?);
                serde_yaml::from_reader(reader)?
            }
            "json" => {
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader(reader)?
            }
            _ => return Err(ScenarioError::UnsupportedFormat(path.display().to_string())),
        };

        info!("Loaded {} scenarios from {:?}", set.scenarios.len(), path);
        Ok(set)
    }

    pub fn from_yaml_str(text: &str) -> ScenarioResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn find(&self, name: &str) -> ScenarioResult<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ScenarioError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Built-in sample graphs
    pub fn builtin() -> Self {
        let letters = |last: char| ('A'..=last).map(|c| c.to_string()).collect::<Vec<_>>();

        let scenarios = vec![
            Scenario::new("textbook")
                .with_vertices(["1", "2", "3", "4", "5", "6"])
                .with_edge("1", "2", 7)
                .with_edge("1", "3", 9)
                .with_edge("1", "6", 14)
                .with_edge("2", "3", 10)
                .with_edge("2", "4", 15)
                .with_edge("3", "4", 11)
                .with_edge("3", "6", 2)
                .with_edge("4", "5", 6)
                .with_edge("5", "6", 9)
                .with_query("1", "5"),
            Scenario::new("seven-vertex")
                .with_vertices(letters('G'))
                .with_edge("A", "C", 3)
                .with_edge("A", "F", 2)
                .with_edge("C", "F", 2)
                .with_edge("C", "E", 1)
                .with_edge("F", "E", 3)
                .with_edge("C", "D", 4)
                .with_edge("D", "B", 1)
                .with_edge("B", "G", 2)
                .with_edge("E", "B", 2)
                .with_edge("F", "B", 6)
                .with_edge("F", "G", 5)
                .with_query("A", "B"),
            Scenario::new("normal")
                .with_vertices(letters('D'))
                .with_edge("A", "B", 1)
                .with_edge("A", "C", 4)
                .with_edge("B", "C", 2)
                .with_edge("C", "D", 1)
                .with_query("A", "D"),
            Scenario::new("disconnected")
                .with_vertices(letters('D'))
                .with_edge("A", "B", 3)
                .with_edge("C", "D", 5)
                .with_query("A", "D"),
            Scenario::new("cycle")
                .with_vertices(["1", "2", "3"])
                .with_edge("1", "2", 1)
                .with_edge("2", "3", 1)
                .with_edge("3", "1", 1)
                .with_query("1", "3"),
            Scenario::new("single-vertex")
                .with_vertices(["A"])
                .with_query("A", "A"),
            Scenario::new("same-start-end")
                .with_vertices(["A", "B"])
                .with_edge("A", "B", 5)
                .with_query("A", "A"),
            Scenario::new("no-edges")
                .with_vertices(letters('C'))
                .with_query("A", "C"),
            Scenario::new("chain")
                .with_vertices(letters('J'))
                .with_edge("A", "B", 1)
                .with_edge("B", "C", 1)
                .with_edge("C", "D", 1)
                .with_edge("D", "E", 1)
                .with_edge("E", "F", 1)
                .with_edge("F", "G", 1)
                .with_edge("G", "H", 1)
                .with_edge("H", "I", 1)
                .with_edge("I", "J", 1)
                .with_query("A", "J"),
            Scenario::new("partially-connected")
                .with_vertices(letters('C'))
                .with_edge("A", "B", 3)
                .with_query("A", "C"),
            Scenario::new("unknown-vertex")
                .with_vertices(["A", "B"])
                .with_edge("A", "B", 1)
                .with_query("A", "C"),
        ];

        ScenarioSet { scenarios }
    }
}
