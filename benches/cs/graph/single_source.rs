use algos_paths::cs::graph::{bellman_ford, dijkstra, Edge, Graph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_edges(vertices: usize, edges: usize, seed: u64) -> Vec<Edge<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..edges)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..vertices),
                rng.gen_range(0..vertices),
                rng.gen_range(0.0..50.0),
            )
        })
        .collect()
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    for &vertices in &[100, 1_000] {
        let edges = random_edges(vertices, vertices * 8, 1234);
        let mut graph = Graph::new();
        for v in 0..vertices {
            graph.add_vertex(v);
        }
        for edge in &edges {
            graph.add_edge(edge.from, edge.to, edge.cost).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("bellman_ford", vertices), &edges, |b, e| {
            b.iter(|| bellman_ford(vertices, black_box(e), 0).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", vertices), &graph, |b, g| {
            b.iter(|| dijkstra(black_box(g), &0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_source);
criterion_main!(benches);
