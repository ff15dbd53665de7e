//! The weighted directed graph builder.
//!
//! A [`Graph`] is the input half of the engine: a fixed vertex count plus an
//! edge map, populated incrementally and then handed to the solver as a
//! whole. There is no incremental recompute; changing an edge after solving
//! means solving again.

use hodos_common::hash::FxHashMap;
use hodos_common::types::{VertexId, Weight, INF};
use hodos_common::{Error, Result};

/// A directed graph with a fixed number of vertices and weighted edges.
///
/// Vertices are dense indices in `[0, vertex_count)`. Edge weights may be
/// negative; negative cycles are the solver's problem, not the builder's.
/// Adding an edge for an ordered pair that already has one overwrites the
/// previous weight (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Number of vertices, immutable after construction.
    vertex_count: u32,
    /// Edge map keyed by `(from, to)`.
    edges: FxHashMap<(u32, u32), Weight>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// A zero-vertex graph is valid; solving it yields an empty solution.
    #[must_use]
    pub fn new(vertex_count: u32) -> Self {
        Self {
            vertex_count,
            edges: FxHashMap::default(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of distinct directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a directed edge, overwriting any previous weight for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is out of range,
    /// or [`Error::InvalidWeight`] if the weight's magnitude reaches the
    /// internal infinity sentinel - such a weight would be indistinguishable
    /// from "unreachable" in the distance matrix.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight <= -INF || weight >= INF {
            return Err(Error::InvalidWeight { weight });
        }
        self.edges.insert((from.raw(), to.raw()), weight);
        Ok(())
    }

    /// Adds edges in both directions with the same weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either endpoint is out of range.
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        self.add_edge(u, v, weight)?;
        self.add_edge(v, u, weight)
    }

    /// Returns the weight of the direct edge `from -> to`, if one exists.
    #[must_use]
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.edges.get(&(from.raw(), to.raw())).copied()
    }

    /// Iterates over all edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.edges
            .iter()
            .map(|(&(from, to), &weight)| (VertexId::new(from), VertexId::new(to), weight))
    }

    /// Validates that `vertex` is in range for this graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if it is not.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.raw() < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_add_edge() {
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(1), 5).unwrap();
        g.add_edge(v(1), v(2), -2).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(v(0), v(1)), Some(5));
        assert_eq!(g.weight(v(1), v(2)), Some(-2));
        assert_eq!(g.weight(v(2), v(0)), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut g = Graph::new(2);
        g.add_edge(v(0), v(1), 10).unwrap();
        g.add_edge(v(0), v(1), 3).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(v(0), v(1)), Some(3));
    }

    #[test]
    fn test_undirected_edge() {
        let mut g = Graph::new(2);
        g.add_undirected_edge(v(0), v(1), 4).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(v(0), v(1)), Some(4));
        assert_eq!(g.weight(v(1), v(0)), Some(4));
    }

    #[test]
    fn test_invalid_vertex_rejected() {
        let mut g = Graph::new(2);
        let err = g.add_edge(v(0), v(2), 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: v(2),
                vertex_count: 2,
            }
        );
        // Nothing was inserted.
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_oversized_weight_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(
            g.add_edge(v(0), v(1), INF).unwrap_err(),
            Error::InvalidWeight { weight: INF }
        );
        assert_eq!(
            g.add_edge(v(0), v(1), -INF).unwrap_err(),
            Error::InvalidWeight { weight: -INF }
        );
        assert_eq!(g.edge_count(), 0);

        // The largest representable finite weight is accepted.
        g.add_edge(v(0), v(1), INF - 1).unwrap();
        assert_eq!(g.weight(v(0), v(1)), Some(INF - 1));
    }

    #[test]
    fn test_zero_vertex_graph() {
        let mut g = Graph::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert!(g.add_edge(v(0), v(0), 1).is_err());
    }

    #[test]
    fn test_edges_iteration() {
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(1), 1).unwrap();
        g.add_edge(v(2), v(0), -7).unwrap();

        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(v(0), v(1), 1), (v(2), v(0), -7)]);
    }
}
