//! Solve throughput across graph sizes and strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hodos_common::types::VertexId;
use hodos_core::Graph;
use hodos_engine::{solve_with, SolveOptions, Strategy};

/// Deterministic pseudo-random graph: a ring for connectivity plus chords.
fn random_graph(n: u32, edges_per_vertex: u32) -> Graph {
    let mut g = Graph::new(n);
    let mut state: u64 = 0x5DEE_CE66_D1CE_4E9B;
    let mut next = || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) as u32
    };

    for i in 0..n {
        g.add_edge(VertexId::new(i), VertexId::new((i + 1) % n), 1)
            .unwrap();
        for _ in 0..edges_per_vertex {
            let to = next() % n;
            let weight = i64::from(next() % 100) + 1;
            g.add_edge(VertexId::new(i), VertexId::new(to), weight)
                .unwrap();
        }
    }
    g
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in &[32, 64, 128, 256] {
        let graph = random_graph(n, 4);
        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, g| {
            let options = SolveOptions {
                strategy: Strategy::Sequential,
                cancel: None,
            };
            b.iter(|| solve_with(g, &options).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, g| {
            let options = SolveOptions {
                strategy: Strategy::Parallel,
                cancel: None,
            };
            b.iter(|| solve_with(g, &options).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
