//! Transitive closure and strongly-connected components.
//!
//! The same recurrence as the distance relaxation, over booleans instead of
//! weights: `reach[i][j] |= reach[i][k] && reach[k][j]`. With bit-packed
//! rows the inner `j` loop collapses to OR-ing row `k` into row `i`.

use hodos_common::types::VertexId;
use hodos_core::matrix::BitMatrix;
use hodos_core::Graph;

/// Computes the boolean reachability relation for every ordered pair.
///
/// Seeded with `reach[i][i]` plus every direct edge, then closed with the
/// Floyd-Warshall recurrence. Weight-independent: negative cycles do not
/// affect the result.
#[must_use]
pub fn transitive_closure(graph: &Graph) -> BitMatrix {
    let n = graph.vertex_count() as usize;
    let mut reach = BitMatrix::new(n);
    for i in 0..n {
        reach.set(i, i);
    }
    for (from, to, _) in graph.edges() {
        reach.set(from.index(), to.index());
    }
    for k in 0..n {
        for i in 0..n {
            if reach.get(i, k) {
                reach.or_row(i, k);
            }
        }
    }
    reach
}

/// Groups vertices into strongly-connected components.
///
/// Two vertices share a component iff each reaches the other. This is the
/// quadratic partition over the closure, not a linear SCC algorithm - fine
/// for a batch engine that has already paid for the closure. Components are
/// ordered by their smallest vertex; members are ascending.
#[must_use]
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let reach = transitive_closure(graph);
    let n = reach.dim();
    let mut assigned = vec![false; n];
    let mut components = Vec::new();

    for i in 0..n {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        let mut members = vec![VertexId::new(i as u32)];
        for j in (i + 1)..n {
            if !assigned[j] && reach.get(i, j) && reach.get(j, i) {
                assigned[j] = true;
                members.push(VertexId::new(j as u32));
            }
        }
        components.push(members);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn graph(n: u32, edges: &[(u32, u32)]) -> Graph {
        let mut g = Graph::new(n);
        for &(from, to) in edges {
            g.add_edge(v(from), v(to), 1).unwrap();
        }
        g
    }

    #[test]
    fn test_closure_includes_self_and_transitive_pairs() {
        let g = graph(4, &[(0, 1), (1, 2)]);
        let reach = transitive_closure(&g);

        for i in 0..4 {
            assert!(reach.get(i, i));
        }
        assert!(reach.get(0, 1));
        assert!(reach.get(0, 2));
        assert!(!reach.get(2, 0));
        assert!(!reach.get(0, 3));
    }

    #[test]
    fn test_closure_ignores_weights() {
        // A negative cycle changes nothing about connectivity.
        let mut g = Graph::new(2);
        g.add_edge(v(0), v(1), -10).unwrap();
        g.add_edge(v(1), v(0), -10).unwrap();
        let reach = transitive_closure(&g);
        assert!(reach.get(0, 1));
        assert!(reach.get(1, 0));
    }

    #[test]
    fn test_scc_singletons_in_a_dag() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(
            strongly_connected_components(&g),
            vec![vec![v(0)], vec![v(1)], vec![v(2)]]
        );
    }

    #[test]
    fn test_scc_cycle_groups_together() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(
            strongly_connected_components(&g),
            vec![vec![v(0), v(1), v(2)], vec![v(3)]]
        );
    }

    #[test]
    fn test_scc_empty_graph() {
        let g = Graph::new(0);
        assert!(strongly_connected_components(&g).is_empty());
    }
}
