//! Criterion benchmarks for flownet.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use flownet::flow::{max_flow, residual_graph};
use flownet::graph::Graph;

/// Layered random network: source 0, `layers` layers of `width` vertices,
/// sink at the end. Edges only go forward, so the graph is acyclic.
fn make_layered_network(layers: u64, width: u64, fan_out: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    let sink = layers * width + 1;

    for i in 0..width {
        graph
            .add_edge(0, 1 + i)
            .set_capacity(rng.gen_range(10..100))
            .unwrap();
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            let tail = 1 + layer * width + i;
            for _ in 0..fan_out {
                let head = 1 + (layer + 1) * width + rng.gen_range(0..width);
                graph
                    .add_edge(tail, head)
                    .set_capacity(rng.gen_range(1..50))
                    .unwrap();
            }
        }
    }
    for i in 0..width {
        let tail = 1 + (layers - 1) * width + i;
        graph
            .add_edge(tail, sink)
            .set_capacity(rng.gen_range(10..100))
            .unwrap();
    }

    graph
}

/// Long chain, the worst case for a recursive DFS.
fn make_chain(len: u64) -> Graph {
    let mut graph = Graph::new();
    for i in 0..len {
        graph.add_edge(i, i + 1);
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_layered_network(20, 50, 3);

    c.bench_function("add_edge_to_1k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let tail = rng.gen_range(0..1_000u64);
            let head = rng.gen_range(0..1_000u64);
            let _ = graph.add_edge(tail, head);
        })
    });
}

fn bench_is_cyclic(c: &mut Criterion) {
    let graph = make_chain(100_000);

    c.bench_function("is_cyclic_chain_100k", |b| b.iter(|| graph.is_cyclic()));
}

fn bench_residual(c: &mut Criterion) {
    let graph = make_layered_network(20, 50, 3);

    c.bench_function("residual_graph_1k", |b| b.iter(|| residual_graph(&graph)));
}

fn bench_max_flow(c: &mut Criterion) {
    let graph = make_layered_network(10, 20, 3);

    c.bench_function("max_flow_layered_200", |b| b.iter(|| max_flow(&graph)));
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_is_cyclic,
    bench_residual,
    bench_max_flow
);
criterion_main!(benches);
