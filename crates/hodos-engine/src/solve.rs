//! The relaxation engine.
//!
//! Dynamic programming over intermediate-vertex inclusion: after phase `k`,
//! `dist[i][j]` holds the shortest cost using only vertices `0..=k` as
//! intermediates. The `k` loop is therefore strictly ordered; the `i`/`j`
//! body of one phase is not, which is what the parallel strategy exploits.

use crate::closure::transitive_closure;
use crate::cycle;
use crate::solution::ApspSolution;
use hodos_common::types::INF;
use hodos_common::{CancelToken, Error, Result};
use hodos_core::matrix::{seed_matrices, DistanceMatrix, NextHopMatrix};
use hodos_core::Graph;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Vertex count at or above which [`Strategy::Auto`] picks the parallel
/// strategy. Below this the per-phase fork/join overhead dominates the
/// O(V²) phase body.
const PARALLEL_THRESHOLD: usize = 128;

/// Execution strategy for the relaxation loop.
///
/// Both strategies compute identical solutions - including the
/// negative-cycle vertex set - so the choice is purely a throughput knob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Pick based on vertex count.
    #[default]
    Auto,
    /// Single-threaded triple loop.
    Sequential,
    /// Rows partitioned across rayon workers within each `k` phase, with a
    /// barrier between phases.
    Parallel,
}

impl Strategy {
    fn resolve(self, vertex_count: usize) -> Self {
        match self {
            Self::Auto => {
                if vertex_count >= PARALLEL_THRESHOLD {
                    Self::Parallel
                } else {
                    Self::Sequential
                }
            }
            other => other,
        }
    }
}

/// Options for [`solve_with`].
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Execution strategy.
    pub strategy: Strategy,
    /// Optional cancellation token, polled once per `k` phase.
    pub cancel: Option<CancelToken>,
}

/// Computes all-pairs shortest paths with default options.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if a cancellation token fires mid-solve
/// (never here, since default options carry no token).
pub fn solve(graph: &Graph) -> Result<ApspSolution> {
    solve_with(graph, &SolveOptions::default())
}

/// Computes all-pairs shortest paths.
///
/// Runs the full relaxation, scans for negative cycles, and computes the
/// transitive closure, returning everything as one frozen
/// [`ApspSolution`]. A detected negative cycle is reported through the
/// solution, not as an error: construction succeeds and distance/path
/// queries refuse.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `options.cancel` fires mid-solve.
pub fn solve_with(graph: &Graph, options: &SolveOptions) -> Result<ApspSolution> {
    let n = graph.vertex_count() as usize;
    let strategy = options.strategy.resolve(n);
    let started = Instant::now();
    tracing::debug!(
        vertices = n,
        edges = graph.edge_count(),
        ?strategy,
        "starting relaxation"
    );

    let (mut dist, mut next) = seed_matrices(graph);
    let cancel = options.cancel.as_ref();
    match strategy {
        Strategy::Sequential => relax_sequential(&mut dist, &mut next, cancel)?,
        Strategy::Parallel => relax_parallel(&mut dist, &mut next, cancel)?,
        Strategy::Auto => unreachable!("resolved above"),
    }

    let negative = cycle::negative_cycle_vertices(&dist);
    if !negative.is_empty() {
        tracing::debug!(vertices = negative.len(), "negative cycle detected");
        // Costs through a cycle are undefined and their raw values depend on
        // update order; canonicalize them so both strategies land on the
        // same matrices.
        cycle::poison_pairs_through(&mut dist, &mut next, &negative);
    }
    let reach = transitive_closure(graph);

    tracing::debug!(elapsed = ?started.elapsed(), "relaxation complete");
    Ok(ApspSolution::new(dist, next, reach, negative))
}

fn check_cancel(cancel: Option<&CancelToken>) -> Result<()> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(Error::Cancelled),
        _ => Ok(()),
    }
}

fn relax_sequential(
    dist: &mut DistanceMatrix,
    next: &mut NextHopMatrix,
    cancel: Option<&CancelToken>,
) -> Result<()> {
    let n = dist.dim();
    for k in 0..n {
        check_cancel(cancel)?;
        for i in 0..n {
            let d_ik = dist.get(i, k);
            if d_ik == INF {
                continue;
            }
            let next_ik = next.get(i, k);
            for j in 0..n {
                let d_kj = dist.get(k, j);
                if d_kj == INF {
                    continue;
                }
                // Saturating: negative cycles can pump magnitudes past any
                // static bound before they are poisoned.
                let candidate = d_ik.saturating_add(d_kj);
                if candidate < dist.get(i, j) {
                    dist.set(i, j, candidate);
                    next.set(i, j, next_ik);
                }
            }
        }
    }
    Ok(())
}

/// Parallel relaxation: within one `k` phase each row is written by exactly
/// one worker, and every cross-row read goes through snapshots of row `k`
/// and column `k` taken before the phase. The `for_each` join is the
/// barrier between phases.
///
/// With `dist[k][k] = 0` the snapshots are exact; once a diagonal goes
/// negative, row/column `k` can keep dropping mid-phase and the sequential
/// pass would see values the snapshot does not. Every cell that divergence
/// can touch is routed through a negative diagonal, and all such cells are
/// canonicalized by the post-relaxation poisoning pass, so the final
/// solution is still strategy-independent.
fn relax_parallel(
    dist: &mut DistanceMatrix,
    next: &mut NextHopMatrix,
    cancel: Option<&CancelToken>,
) -> Result<()> {
    let n = dist.dim();
    for k in 0..n {
        check_cancel(cancel)?;
        let row_k = dist.row(k).to_vec();
        let col_k = dist.column(k);
        let next_col_k = next.column(k);

        dist.data_mut()
            .par_chunks_mut(n)
            .zip(next.data_mut().par_chunks_mut(n))
            .enumerate()
            .for_each(|(i, (dist_row, next_row))| {
                let d_ik = col_k[i];
                if d_ik == INF {
                    return;
                }
                let next_ik = next_col_k[i];
                for j in 0..n {
                    let d_kj = row_k[j];
                    if d_kj == INF {
                        continue;
                    }
                    let candidate = d_ik.saturating_add(d_kj);
                    if candidate < dist_row[j] {
                        dist_row[j] = candidate;
                        next_row[j] = next_ik;
                    }
                }
            });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hodos_common::types::VertexId;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn graph(n: u32, edges: &[(u32, u32, i64)]) -> Graph {
        let mut g = Graph::new(n);
        for &(from, to, w) in edges {
            g.add_edge(v(from), v(to), w).unwrap();
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let solution = solve(&Graph::new(0)).unwrap();
        assert_eq!(solution.vertex_count(), 0);
        assert!(!solution.has_negative_cycle());
    }

    #[test]
    fn test_detour_beats_direct_edge() {
        let g = graph(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 4)]);
        let solution = solve(&g).unwrap();
        assert_eq!(solution.distance(v(0), v(2)).unwrap(), 3);
        assert_eq!(solution.path(v(0), v(2)).unwrap(), vec![v(0), v(1), v(2)]);
    }

    #[test]
    fn test_all_pairs_distances() {
        let g = graph(
            4,
            &[
                (0, 1, 3),
                (0, 3, 7),
                (1, 0, 8),
                (1, 2, 2),
                (2, 0, 5),
                (2, 1, 4),
                (3, 2, 1),
            ],
        );
        let solution = solve(&g).unwrap();
        assert_eq!(solution.distance(v(0), v(2)).unwrap(), 5); // 0 -> 1 -> 2
        assert_eq!(solution.distance(v(3), v(1)).unwrap(), 5); // 3 -> 2 -> 1
        assert_eq!(solution.path(v(0), v(2)).unwrap(), vec![v(0), v(1), v(2)]);
        assert_eq!(solution.path(v(3), v(1)).unwrap(), vec![v(3), v(2), v(1)]);
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let g = graph(3, &[(0, 1, 4), (0, 2, 7), (1, 2, -2)]);
        let solution = solve(&g).unwrap();
        assert!(!solution.has_negative_cycle());
        assert_eq!(solution.distance(v(0), v(2)).unwrap(), 2);
    }

    #[test]
    fn test_negative_cycle_detected() {
        let g = graph(3, &[(0, 1, 1), (1, 2, -5), (2, 0, 1)]);
        let solution = solve(&g).unwrap();
        assert!(solution.has_negative_cycle());
        assert_eq!(solution.distance(v(0), v(2)), Err(Error::NegativeCycle));
        assert_eq!(solution.path(v(0), v(2)), Err(Error::NegativeCycle));
        // Reachability is weight-independent and keeps answering.
        assert!(solution.is_reachable(v(0), v(2)).unwrap());
    }

    #[test]
    fn test_negative_self_loop() {
        let g = graph(2, &[(0, 0, -1)]);
        let solution = solve(&g).unwrap();
        assert!(solution.has_negative_cycle());
        assert_eq!(solution.negative_cycle_vertices(), &[v(0)]);
    }

    #[test]
    fn test_disconnected_pair() {
        // Vertex 4 has no edges at all.
        let g = graph(
            5,
            &[
                (0, 1, 3),
                (0, 3, 7),
                (1, 0, 8),
                (1, 2, 2),
                (2, 0, 5),
                (2, 1, 4),
                (3, 2, 1),
            ],
        );
        let solution = solve(&g).unwrap();
        assert_eq!(
            solution.distance(v(0), v(4)),
            Err(Error::NoPath {
                from: v(0),
                to: v(4),
            })
        );
        assert_eq!(
            solution.path(v(0), v(4)),
            Err(Error::NoPath {
                from: v(0),
                to: v(4),
            })
        );
        assert!(!solution.is_reachable(v(0), v(4)).unwrap());
    }

    #[test]
    fn test_strategies_agree() {
        let g = graph(
            4,
            &[
                (0, 1, 3),
                (0, 3, 7),
                (1, 0, 8),
                (1, 2, 2),
                (2, 0, 5),
                (2, 1, 4),
                (3, 2, 1),
            ],
        );
        let sequential = solve_with(
            &g,
            &SolveOptions {
                strategy: Strategy::Sequential,
                cancel: None,
            },
        )
        .unwrap();
        let parallel = solve_with(
            &g,
            &SolveOptions {
                strategy: Strategy::Parallel,
                cancel: None,
            },
        )
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_strategies_agree_with_negative_cycle() {
        // A negative self-loop plus a zero-weight round trip: both vertices
        // sit on a negative closed walk, and naive per-phase snapshots would
        // let the strategies drift apart here.
        let g = graph(2, &[(0, 0, -1), (0, 1, 0), (1, 0, 0)]);
        let sequential = solve_with(
            &g,
            &SolveOptions {
                strategy: Strategy::Sequential,
                cancel: None,
            },
        )
        .unwrap();
        let parallel = solve_with(
            &g,
            &SolveOptions {
                strategy: Strategy::Parallel,
                cancel: None,
            },
        )
        .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.negative_cycle_vertices(), &[v(0), v(1)]);
        assert_eq!(parallel.negative_cycle_vertices(), &[v(0), v(1)]);
    }

    #[test]
    fn test_near_sentinel_weight_still_reported() {
        // The largest admissible weight must come back as a real distance,
        // not be mistaken for "unreachable".
        let g = graph(2, &[(0, 1, INF - 1)]);
        let solution = solve(&g).unwrap();
        assert_eq!(solution.distance(v(0), v(1)).unwrap(), INF - 1);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let g = graph(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 4)]);
        assert_eq!(solve(&g).unwrap(), solve(&g).unwrap());
    }

    #[test]
    fn test_pre_cancelled_token() {
        let token = CancelToken::new();
        token.cancel();
        let g = graph(2, &[(0, 1, 1)]);
        let result = solve_with(
            &g,
            &SolveOptions {
                strategy: Strategy::Sequential,
                cancel: Some(token),
            },
        );
        assert_eq!(result, Err(Error::Cancelled));
    }

    #[test]
    fn test_auto_resolves_by_size() {
        assert_eq!(Strategy::Auto.resolve(8), Strategy::Sequential);
        assert_eq!(Strategy::Auto.resolve(PARALLEL_THRESHOLD), Strategy::Parallel);
        assert_eq!(Strategy::Sequential.resolve(100_000), Strategy::Sequential);
    }
}
