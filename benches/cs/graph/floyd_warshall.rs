use algos_paths::cs::graph::{floyd_warshall, AdjacencyMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Dense random digraph with roughly `density` of all arcs present and
/// non-negative weights.
fn random_matrix(vertices: usize, density: f64, seed: u64) -> AdjacencyMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::new(vertices);
    for from in 0..vertices {
        for to in 0..vertices {
            if from != to && rng.gen_bool(density) {
                matrix
                    .set_edge(from, to, rng.gen_range(1.0..100.0))
                    .unwrap();
            }
        }
    }
    matrix
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    for &vertices in &[32, 128, 256] {
        let matrix = random_matrix(vertices, 0.2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(vertices), &matrix, |b, m| {
            b.iter(|| floyd_warshall(black_box(m)));
        });
    }
    group.finish();
}

fn bench_path_reconstruction(c: &mut Criterion) {
    let result = floyd_warshall(&random_matrix(128, 0.05, 7));
    c.bench_function("floyd_warshall_reports_from_0", |b| {
        b.iter(|| result.reports_from(black_box(0)).unwrap());
    });
}

criterion_group!(benches, bench_floyd_warshall, bench_path_reconstruction);
criterion_main!(benches);
