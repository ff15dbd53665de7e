//! The frozen result of a solve and its query surface.

use crate::path;
use hodos_common::types::{VertexId, Weight, INF};
use hodos_common::{Error, Result};
use hodos_core::matrix::{BitMatrix, DistanceMatrix, NextHopMatrix};
use serde::{Deserialize, Serialize};

/// An immutable all-pairs shortest path snapshot.
///
/// Produced by [`solve`](crate::solve::solve); represents "shortest paths as
/// of this topology". All queries take `&self` and are safe to run
/// concurrently. The internal INF/no-hop sentinels never escape: unreachable
/// pairs surface as [`Error::NoPath`] and a detected negative cycle gates
/// every distance and path query with [`Error::NegativeCycle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApspSolution {
    dist: DistanceMatrix,
    next: NextHopMatrix,
    reach: BitMatrix,
    negative_cycle_vertices: Vec<VertexId>,
}

impl ApspSolution {
    pub(crate) fn new(
        dist: DistanceMatrix,
        next: NextHopMatrix,
        reach: BitMatrix,
        negative_cycle_vertices: Vec<VertexId>,
    ) -> Self {
        Self {
            dist,
            next,
            reach,
            negative_cycle_vertices,
        }
    }

    /// Returns the number of vertices this solution was computed over.
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.dist.dim() as u32
    }

    /// Returns true if the graph contains a negative-weight cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle_vertices.is_empty()
    }

    /// Vertices with a negative-weight closed walk through them.
    ///
    /// Each listed vertex lies on, or reaches and is reached by, some
    /// negative cycle; the set is independent of execution strategy and
    /// ascending by vertex index. Empty exactly when
    /// [`has_negative_cycle`] is false.
    ///
    /// [`has_negative_cycle`]: Self::has_negative_cycle
    #[must_use]
    pub fn negative_cycle_vertices(&self) -> &[VertexId] {
        &self.negative_cycle_vertices
    }

    /// Returns the shortest-path cost from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if either index is out of range.
    /// - [`Error::NegativeCycle`] if any negative cycle was detected; every
    ///   stored distance is suspect once one exists.
    /// - [`Error::NoPath`] if the pair is disconnected.
    pub fn distance(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.check_no_negative_cycle()?;
        let d = self.dist.get(from.index(), to.index());
        if d == INF {
            Err(Error::NoPath { from, to })
        } else {
            Ok(d)
        }
    }

    /// Reconstructs the shortest path from `from` to `to` as an explicit
    /// vertex sequence, starting with `from` and ending with `to`.
    ///
    /// `path(i, i)` is `[i]`.
    ///
    /// # Errors
    ///
    /// Same gating as [`distance`](Self::distance), plus
    /// [`Error::InternalConsistency`] if the next-hop walk fails to
    /// terminate within `V` steps (a corrupt matrix, not a long path).
    pub fn path(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.check_no_negative_cycle()?;
        if self.dist.get(from.index(), to.index()) == INF {
            return Err(Error::NoPath { from, to });
        }
        path::reconstruct(&self.next, from, to)
    }

    /// Returns true if `to` is reachable from `from`.
    ///
    /// Weight-independent: served from the transitive closure, so it stays
    /// valid even when a negative cycle has poisoned the distances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if either index is out of range.
    pub fn is_reachable(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.reach.get(from.index(), to.index()))
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() < self.dist.dim() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_no_negative_cycle(&self) -> Result<()> {
        if self.has_negative_cycle() {
            Err(Error::NegativeCycle)
        } else {
            Ok(())
        }
    }
}
