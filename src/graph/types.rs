//! Core type definitions for the graph

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u64;

/// Accumulated path length. Twice as wide as [`Weight`], so a sum over
/// any simple path (fewer than 2^64 edges) cannot reach [`INFINITY`].
pub type Distance = u128;

/// Distance reported when no path exists between two vertices
pub const INFINITY: Distance = Distance::MAX;

/// Opaque handle to a vertex slot inside a [`Graph`](super::Graph)
///
/// Handles are only meaningful for the graph that issued them. A handle
/// freed by vertex removal may be reissued to a later vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

/// Vertex label, unique within a graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Label(String);

// Accepts integers as well as strings, so `[1, 2, 7]` works in YAML files
impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl<'de> Visitor<'de> for LabelVisitor {
            type Value = Label;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer label")
            }

            fn visit_str<E>(self, value: &str) -> Result<Label, E>
            where
                E: de::Error,
            {
                Ok(Label::new(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Label, E>
            where
                E: de::Error,
            {
                Ok(Label(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Label, E>
            where
                E: de::Error,
            {
                Ok(Label(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Label, E>
            where
                E: de::Error,
            {
                Ok(Label(value.to_string()))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
