//! Benchmark: nearest-sample lookup cost as series grow.
//!
//! Compares a fresh sort-per-query (`correlate`) against the shared
//! [`SeriesIndex`] batch path, which sorts once.
//!
//! Run with:
//! ```bash
//! cargo bench -p oneiro-correlate --bench correlate_bench
//! ```

use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use oneiro_core::BiometricSample;
use oneiro_correlate::{correlate, SeriesIndex};

fn build_series(n: usize) -> HashMap<String, Vec<BiometricSample>> {
    let mut rng = StdRng::seed_from_u64(7);
    let samples: Vec<BiometricSample> = (0..n)
        .map(|_| BiometricSample::new(rng.gen_range(0..1_000_000), rng.gen_range(40.0..120.0)))
        .collect();
    HashMap::from([("heart_rate".to_string(), samples)])
}

fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate/nearest");

    for n in [100usize, 10_000, 100_000] {
        let series = build_series(n);

        group.bench_with_input(BenchmarkId::new("single", n), &series, |b, series| {
            b.iter(|| correlate(500_000, series));
        });

        let index = SeriesIndex::build(&series);
        group.bench_with_input(BenchmarkId::new("indexed", n), &index, |b, index| {
            b.iter(|| index.correlate(500_000));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_correlate);
criterion_main!(benches);
