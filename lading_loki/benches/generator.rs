//! Benchmarks for Loki entry generation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

use lading_loki::{Cardinality, EntryGenerator, Faker, Flog, LabelPool, NoopSink};
use rand::{SeedableRng, rngs::SmallRng};
use std::{num::NonZeroU32, time::Duration};

fn label_pool_setup(c: &mut Criterion) {
    c.bench_function("label_pool_setup", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(19690716);
            let _pool = LabelPool::new(&mut rng, &Faker, Cardinality::default())
                .expect("failed to build pool");
        })
    });
}

fn generate_all(c: &mut Criterion) {
    let kb = 1_024; // 1 KiB
    let streams = NonZeroU32::new(4).expect("non-zero");

    let mut group = c.benchmark_group("generate_all");
    for size in &[10 * kb, 100 * kb, 1_000 * kb] {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(19690716);
                let pool = LabelPool::new(&mut rng, &Faker, Cardinality::default())
                    .expect("failed to build pool");
                let generator =
                    EntryGenerator::new(pool, Flog, NoopSink, 1, streams, size..size + 1)
                        .expect("failed to build generator");
                generator
                    .generate(&mut rng, "bench")
                    .expect("failed to generate");
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(30));
    targets = label_pool_setup, generate_all,
);
