//! Path reconstruction by next-hop walking.

use hodos_common::types::{VertexId, NO_HOP};
use hodos_common::{Error, Result};
use hodos_core::matrix::NextHopMatrix;

/// Walks next-hop pointers from `from` to `to`.
///
/// The walk is bounded at `V` vertices: a shortest path is simple, so
/// needing more hops means the matrix is corrupt and the walk would loop
/// forever. That case fails loudly as [`Error::InternalConsistency`] rather
/// than being reported as a long path.
///
/// # Errors
///
/// - [`Error::NoPath`] if `next[from][to]` is unset.
/// - [`Error::InternalConsistency`] if a pointer mid-walk is unset or the
///   bound is exceeded.
pub(crate) fn reconstruct(
    next: &NextHopMatrix,
    from: VertexId,
    to: VertexId,
) -> Result<Vec<VertexId>> {
    let n = next.dim();
    if from != to && next.get(from.index(), to.index()) == NO_HOP {
        return Err(Error::NoPath { from, to });
    }

    let mut walk = vec![from];
    let mut cur = from;
    while cur != to {
        if walk.len() >= n {
            return Err(Error::InternalConsistency(format!(
                "next-hop walk from {from} to {to} exceeded {n} vertices"
            )));
        }
        let hop = next.get(cur.index(), to.index());
        if hop == NO_HOP {
            return Err(Error::InternalConsistency(format!(
                "next-hop pointer unset at {cur} while walking {from} to {to}"
            )));
        }
        cur = VertexId::new(hop);
        walk.push(cur);
    }
    Ok(walk)
}
