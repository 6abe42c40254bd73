// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Basic operations - raw add/multiply/divide/power/sqrt throughput
// 2. Percentage operations - the composed percent helpers
//
// Every operation is O(1); these benchmarks exist to catch regressions in
// the error-checking fast path, not to compare algorithms.
// ============================================================================

use calcutil::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    group.bench_function("add", |b| {
        b.iter(|| black_box(add(black_box(123.456), black_box(789.012))))
    });

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(multiply(black_box(123.456), black_box(789.012))))
    });

    group.bench_function("divide", |b| {
        b.iter(|| black_box(divide(black_box(123.456), black_box(789.012))))
    });

    group.bench_function("power", |b| {
        b.iter(|| black_box(power(black_box(2.0), black_box(10.5))))
    });

    group.bench_function("sqrt", |b| {
        b.iter(|| black_box(sqrt(black_box(12345.678))))
    });

    group.finish();
}

fn benchmark_percentage_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentage_operations");

    group.bench_function("percent_of", |b| {
        b.iter(|| black_box(percent_of(black_box(1000.0), black_box(17.5))))
    });

    group.bench_function("what_percent", |b| {
        b.iter(|| black_box(what_percent(black_box(175.0), black_box(1000.0))))
    });

    group.bench_function("subtract_percent", |b| {
        b.iter(|| black_box(subtract_percent(black_box(1000.0), black_box(17.5))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_basic_operations,
    benchmark_percentage_operations
);
criterion_main!(benches);
