//! Heap-vs-array priority queue comparison.
//!
//! The two queue implementations trade a log factor on extraction against
//! constant-time decrease-key. These benches measure the raw operation mix
//! and the end-to-end effect on Dijkstra over sparse and dense graphs,
//! where the crossover between O((V+E) log V) and O(V² + E) lives.

use std::hint::black_box;

use arbor_core::{AdjacencyGraph, ArrayPq, BinaryHeapPq, IndexedPriorityQueue};
use arbor_common::VertexId;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fill_and_drain<Q: IndexedPriorityQueue>(mut queue: Q, priorities: &[f64]) -> usize {
    for (i, &p) in priorities.iter().enumerate() {
        queue.insert(VertexId::from_index(i), p);
    }
    let mut drained = 0;
    while queue.extract_min().is_some() {
        drained += 1;
    }
    drained
}

fn decrease_key_mix<Q: IndexedPriorityQueue>(mut queue: Q, n: usize, rng: &mut StdRng) -> usize {
    let pairs: Vec<(VertexId, f64)> = (0..n)
        .map(|i| (VertexId::from_index(i), f64::from(rng.gen_range(0..1_000_000))))
        .collect();
    queue.insert_all(&pairs);

    // Dijkstra-shaped load: a handful of decreases per extraction.
    let mut drained = 0;
    while let Some(u) = queue.extract_min() {
        drained += 1;
        for _ in 0..4 {
            let element = VertexId::from_index(rng.gen_range(0..n));
            if let Some(p) = queue.priority(element) {
                queue.change_priority(element, p / 2.0);
            }
        }
        black_box(u);
    }
    drained
}

fn bench_queue_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_ops");
    for n in [256usize, 4096] {
        let mut rng = StdRng::seed_from_u64(7);
        let priorities: Vec<f64> = (0..n)
            .map(|_| f64::from(rng.gen_range(0..1_000_000)))
            .collect();

        group.bench_with_input(BenchmarkId::new("fill_drain/binary_heap", n), &n, |b, &n| {
            b.iter(|| fill_and_drain(BinaryHeapPq::new(n), black_box(&priorities)));
        });
        group.bench_with_input(BenchmarkId::new("fill_drain/array", n), &n, |b, &n| {
            b.iter(|| fill_and_drain(ArrayPq::new(n), black_box(&priorities)));
        });

        group.bench_with_input(
            BenchmarkId::new("decrease_key_mix/binary_heap", n),
            &n,
            |b, &n| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(11);
                    decrease_key_mix(BinaryHeapPq::new(n), n, &mut rng)
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("decrease_key_mix/array", n), &n, |b, &n| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(11);
                decrease_key_mix(ArrayPq::new(n), n, &mut rng)
            });
        });
    }
    group.finish();
}

/// Connected sparse graph: path backbone plus ~3 random chords per vertex.
fn sparse_graph(n: u32, seed: u64) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = AdjacencyGraph::undirected(n as usize);
    for i in 0..n - 1 {
        g.add_weighted_edge(
            VertexId::new(i),
            VertexId::new(i + 1),
            f64::from(rng.gen_range(1..100)),
        )
        .expect("endpoints in range");
    }
    for _ in 0..3 * n as usize {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        g.add_weighted_edge(
            VertexId::new(a),
            VertexId::new(b),
            f64::from(rng.gen_range(1..100)),
        )
        .expect("endpoints in range");
    }
    g
}

/// Complete graph on n vertices.
fn dense_graph(n: u32, seed: u64) -> AdjacencyGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = AdjacencyGraph::undirected(n as usize);
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_weighted_edge(
                VertexId::new(i),
                VertexId::new(j),
                f64::from(rng.gen_range(1..100)),
            )
            .expect("endpoints in range");
        }
    }
    g
}

fn bench_dijkstra(c: &mut Criterion) {
    let source = VertexId::new(0);

    let mut group = c.benchmark_group("dijkstra_sparse");
    for n in [1024u32, 4096] {
        let g = sparse_graph(n, 42);
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &g, |b, g| {
            b.iter(|| g.dijkstra_binary_heap(black_box(source)));
        });
        group.bench_with_input(BenchmarkId::new("array", n), &g, |b, g| {
            b.iter(|| g.dijkstra_array(black_box(source)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("dijkstra_dense");
    for n in [128u32, 512] {
        let g = dense_graph(n, 42);
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &g, |b, g| {
            b.iter(|| g.dijkstra_binary_heap(black_box(source)));
        });
        group.bench_with_input(BenchmarkId::new("array", n), &g, |b, g| {
            b.iter(|| g.dijkstra_array(black_box(source)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queue_ops, bench_dijkstra);
criterion_main!(benches);
