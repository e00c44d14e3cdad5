use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dual_pca::{pca, pca_high_dim};
use ndarray::{Array, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn generate_data(n_samples: usize, n_features: usize) -> Array2<f64> {
    Array::random((n_samples, n_features), Uniform::new(-1.0, 1.0))
}

// The direct route pays for a D x D eigendecomposition, the dual route for
// an N x N one; the tall/wide/square shapes below show the crossover.
fn bench_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca_direct");

    for &(n_samples, n_features) in [(200, 30), (30, 200), (100, 100)].iter() {
        let data = generate_data(n_samples, n_features);
        let num_components = n_samples.min(n_features).min(10);

        group.throughput(Throughput::Elements((n_samples * n_features) as u64));
        group.bench_with_input(
            BenchmarkId::new("pca", format!("{}x{}", n_samples, n_features)),
            &data,
            |b, data| b.iter(|| pca(data, num_components).unwrap()),
        );
    }
    group.finish();
}

fn bench_dual(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca_dual");

    for &(n_samples, n_features) in [(200, 30), (30, 200), (100, 100)].iter() {
        let data = generate_data(n_samples, n_features);
        let num_components = n_samples.min(n_features).min(10);

        group.throughput(Throughput::Elements((n_samples * n_features) as u64));
        group.bench_with_input(
            BenchmarkId::new("pca_high_dim", format!("{}x{}", n_samples, n_features)),
            &data,
            |b, data| b.iter(|| pca_high_dim(data, num_components).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_direct, bench_dual);
criterion_main!(benches);
