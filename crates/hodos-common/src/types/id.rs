//! Vertex identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a vertex in a graph.
///
/// Vertices are dense integer indices in `[0, V)` where `V` is the vertex
/// count fixed at graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a new vertex identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the identifier as a matrix/slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
