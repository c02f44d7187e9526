use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use concord_consensus::{cluster_statements, SimilarityMatrix};
use concord_core::models::Statement;

const DIMS: usize = 384;

fn embedding(seed: usize) -> Vec<f32> {
    let hash = blake3::hash(format!("view {}", seed % 17).as_bytes());
    let bytes = hash.as_bytes();
    (0..DIMS).map(|i| bytes[i % 32] as f32 / 255.0 + (i % 7) as f32 * 0.01).collect()
}

fn statements(n: usize) -> Vec<Statement> {
    (0..n)
        .map(|i| Statement::new(format!("s{i}"), "bench", format!("view {i}")).with_embedding(embedding(i)))
        .collect()
}

fn bench_cluster_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_statements");
    for n in [50usize, 200] {
        let input = statements(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| cluster_statements(black_box(input)))
        });
    }
    group.finish();
}

fn bench_similarity_matrix(c: &mut Criterion) {
    let vectors: Vec<Vec<f32>> = (0..200).map(embedding).collect();
    let refs: Vec<&[f32]> = vectors.iter().map(Vec::as_slice).collect();
    c.bench_function("similarity_matrix_200", |b| {
        b.iter(|| SimilarityMatrix::compute(black_box(&refs)).unwrap())
    });
}

criterion_group!(benches, bench_cluster_statements, bench_similarity_matrix);
criterion_main!(benches);
