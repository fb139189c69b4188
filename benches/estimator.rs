//! Criterion benchmarks for Monte Carlo π estimation.
//!
//! Benchmarks cover:
//! - Serial estimation at several trial counts, both sampling intervals
//! - Parallel (batch-partitioned) estimation at larger trial counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mc_numerics::estimator::{estimate_pi, estimate_pi_parallel};
use mc_numerics::random::{create_rng, SquareInterval};

/// Benchmark the serial estimation loop.
fn bench_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_pi");

    for samples in [1_000_u64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("unit", samples), &samples, |b, &n| {
            let mut rng = create_rng(42);
            b.iter(|| estimate_pi(black_box(n), SquareInterval::Unit, &mut rng).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("centered", samples), &samples, |b, &n| {
            let mut rng = create_rng(42);
            b.iter(|| estimate_pi(black_box(n), SquareInterval::Centered, &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the partitioned parallel path.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_pi_parallel");
    group.sample_size(20); // Reduce sample size for slower benchmarks

    for samples in [100_000_u64, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            b.iter(|| estimate_pi_parallel(black_box(n), SquareInterval::Unit, 42).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serial, bench_parallel);
criterion_main!(benches);
