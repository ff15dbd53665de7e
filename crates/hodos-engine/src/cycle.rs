//! Negative-cycle detection.
//!
//! After a full relaxation pass, a negative entry on the distance-matrix
//! diagonal means some cycle through that vertex has negative total weight:
//! the vertex found a way back to itself cheaper than staying put.
//!
//! Which diagonal entries actually go negative during relaxation depends on
//! update order, so the raw diagonal is only a seed set. Negativity
//! propagates: any vertex that reaches a negative diagonal and is reached
//! back from it has a negative closed walk of its own. Deriving the final
//! set from seeds plus reachability makes it exact and identical for every
//! execution strategy. The same reasoning canonicalizes the matrices: every
//! pair routed through a cycle vertex has no defined cost, and
//! [`poison_pairs_through`] overwrites those cells so solved matrices do
//! not depend on how far a particular strategy happened to pump them down.

use hodos_common::types::{VertexId, INF, NEG_INF, NO_HOP};
use hodos_core::matrix::{DistanceMatrix, NextHopMatrix};

/// Collects every vertex with a negative-weight closed walk through it.
///
/// Seeds from the negative diagonal, then closes over mutual reachability
/// with the seeds. Result is ascending by vertex index.
pub(crate) fn negative_cycle_vertices(dist: &DistanceMatrix) -> Vec<VertexId> {
    let n = dist.dim();
    let seeds: Vec<usize> = (0..n).filter(|&k| dist.get(k, k) < 0).collect();
    if seeds.is_empty() {
        return Vec::new();
    }
    (0..n)
        .filter(|&i| {
            seeds
                .iter()
                .any(|&k| dist.get(i, k) != INF && dist.get(k, i) != INF)
        })
        .map(|i| VertexId::new(i as u32))
        .collect()
}

/// Overwrites every pair that can route through a cycle vertex with the
/// canonical "undefined" markers: `NEG_INF` distance, unset next hop.
///
/// Reading and writing in one pass is safe because poisoning never changes
/// whether a cell equals `INF`, which is all the predicate looks at.
pub(crate) fn poison_pairs_through(
    dist: &mut DistanceMatrix,
    next: &mut NextHopMatrix,
    cycle_vertices: &[VertexId],
) {
    let n = dist.dim();
    for i in 0..n {
        for j in 0..n {
            let through_cycle = cycle_vertices
                .iter()
                .any(|&c| dist.get(i, c.index()) != INF && dist.get(c.index(), j) != INF);
            if through_cycle {
                dist.set(i, j, NEG_INF);
                next.set(i, j, NO_HOP);
            }
        }
    }
}
