use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use passtable::{distribute, generate, generate_with, PartitionConfig, TiePolicy};

/// Benchmark a single split of a printable-ASCII pool
fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");

    for streams in [8, 95, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(streams), streams, |b, &streams| {
            b.iter(|| black_box(distribute(95, streams).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark table generation with few streams (no refinement needed)
fn bench_generate_few_streams(c: &mut Criterion) {
    c.bench_function("generate_95x8_16_streams", |b| {
        b.iter(|| black_box(generate(95, 8, 16).unwrap()));
    });
}

/// Benchmark table generation where most streams are refined to the last row
fn bench_generate_deep_refinement(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_binary_pool");

    for streams in [64, 1024, 65536].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(streams), streams, |b, &streams| {
            b.iter(|| black_box(generate(2, 16, streams).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the overlapping configuration (ties survive every row)
fn bench_generate_overlap(c: &mut Criterion) {
    let config = PartitionConfig::new(1, 32, 4096).with_tie_policy(TiePolicy::AllowOverlap);
    c.bench_function("generate_overlap_single_symbol", |b| {
        b.iter(|| black_box(generate_with(&config).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_distribute,
    bench_generate_few_streams,
    bench_generate_deep_refinement,
    bench_generate_overlap
);
criterion_main!(benches);
