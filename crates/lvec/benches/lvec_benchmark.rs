//! # LVec Benchmark
//!
//! Measures append (with growth), front insertion and front removal.
//!
//! Run with: cargo bench --package lvec --bench lvec_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lvec::LVec;

fn filled(count: u32) -> LVec<u32> {
    let mut nums = LVec::new().unwrap();
    for n in 0..count {
        nums.push(n).unwrap();
    }
    nums
}

/// Append from empty, paying for every 1.5x growth step.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("lvec_append");

    for count in [1_000u32, 10_000, 100_000] {
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::new("growing", count), &count, |b, &count| {
            b.iter(|| {
                let nums = filled(black_box(count));
                black_box(nums.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reserved", count), &count, |b, &count| {
            b.iter(|| {
                let mut nums: LVec<u32> = LVec::new().unwrap();
                nums.reserve_minimum(count as usize).unwrap();
                for n in 0..black_box(count) {
                    nums.push(n).unwrap();
                }
                black_box(nums.len())
            });
        });
    }

    group.finish();
}

/// Insert at index 0: worst-case shift of the whole tail.
fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("lvec_insert_front");

    for count in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || filled(count),
                |mut nums| {
                    nums.insert(black_box(7), 0).unwrap();
                    nums
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Remove at index 0 versus removing the last element.
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("lvec_remove");

    for count in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::new("front", count), &count, |b, &count| {
            b.iter_batched(
                || filled(count),
                |mut nums| {
                    nums.remove(0).unwrap();
                    nums
                },
                criterion::BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("last", count), &count, |b, &count| {
            b.iter_batched(
                || filled(count),
                |mut nums| {
                    nums.pop().unwrap();
                    nums
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_insert_front, bench_remove);
criterion_main!(benches);
