//! Benchmarks for the smoothing pass and the MAPE grid search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use des_forecast::models::exponential::{mape_for, smooth, SmoothingParameters};
use des_forecast::utils::grid_search::{grid_search, GridSearchConfig};

fn generate_trend(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 300.0 + 12.0 * i as f64 + 25.0 * (i as f64 * 0.7).sin())
        .collect()
}

fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");

    for size in [16, 43, 128, 512].iter() {
        let series = generate_trend(*size);

        group.bench_with_input(BenchmarkId::new("smooth", size), size, |b, _| {
            b.iter(|| smooth(black_box(&series), SmoothingParameters::default()))
        });

        group.bench_with_input(BenchmarkId::new("mape_for", size), size, |b, _| {
            b.iter(|| mape_for(black_box(&series), 0.5, 0.5))
        });
    }

    group.finish();
}

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");
    group.sample_size(20);

    let config = GridSearchConfig::default();
    for size in [16, 43, 128].iter() {
        let series = generate_trend(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| grid_search(black_box(&series), &config))
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| {
                des_forecast::utils::grid_search::grid_search_parallel(black_box(&series), &config)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_smoothing, bench_grid_search);
criterion_main!(benches);
