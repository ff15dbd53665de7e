//! Dense matrix storage for the solver.
//!
//! Both output matrices of a solve are dense `V x V` row-major arrays:
//!
//! - [`DistanceMatrix`] - shortest known cost per ordered pair
//! - [`NextHopMatrix`] - first hop of the recorded shortest path
//! - [`BitMatrix`] - bit-packed booleans for transitive closure
//!
//! [`seed_matrices`] establishes the initial state the relaxation loop
//! starts from.

mod bit;
mod dense;

pub use bit::BitMatrix;
pub use dense::SquareMatrix;

use crate::graph::Graph;
use hodos_common::types::{Weight, INF, NO_HOP};

/// Shortest-distance matrix: `INF` means "no path known".
pub type DistanceMatrix = SquareMatrix<Weight>;

/// Next-hop matrix: `NO_HOP` means "unset". Entries are raw vertex indices.
pub type NextHopMatrix = SquareMatrix<u32>;

/// Builds the initial distance and next-hop matrices for a graph.
///
/// Guarantees on the result:
/// - `dist[i][i] = 0` and `dist[i][j] = INF` for `i != j` without an edge,
/// - direct edges overwrite their cell, last write already folded in by the
///   graph's edge map,
/// - a self-loop contributes `min(0, w)` on the diagonal: a non-negative
///   self-loop cannot shorten anything, a negative one must land so the
///   cycle scan sees it,
/// - `next[i][j] = j` exactly where a direct edge exists.
#[must_use]
pub fn seed_matrices(graph: &Graph) -> (DistanceMatrix, NextHopMatrix) {
    let n = graph.vertex_count() as usize;
    let mut dist = SquareMatrix::filled(n, INF);
    let mut next = SquareMatrix::filled(n, NO_HOP);

    for i in 0..n {
        dist.set(i, i, 0);
    }
    for (from, to, weight) in graph.edges() {
        let (i, j) = (from.index(), to.index());
        if i == j {
            dist.set(i, i, weight.min(0));
        } else {
            dist.set(i, j, weight);
        }
        next.set(i, j, to.raw());
    }

    (dist, next)
}
