//! Benchmarks for Murmur3 and imohash fingerprints.
//!
//! Run with: cargo bench --bench fingerprint_benchmark
//!
//! Fingerprint cost should plateau once inputs reach the sampling threshold,
//! while raw Murmur3 keeps growing linearly.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imohash_oracle::conformance::{generate_buffer, prefix_digest};
use imohash_oracle::hashing::{murmur3_x64_128, SAMPLE_THRESHOLD};
use imohash_oracle::imohash;
use std::hint::black_box;

const SIZES: &[usize] = &[16, 1024, 64 * 1024, SAMPLE_THRESHOLD, 4 * 1024 * 1024];

fn bench_murmur3(c: &mut Criterion) {
    let data = generate_buffer(*SIZES.last().unwrap_or(&0));
    let mut group = c.benchmark_group("murmur3_x64_128");
    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| murmur3_x64_128(black_box(&data[..size]), 0));
        });
    }
    group.finish();
}

fn bench_imohash(c: &mut Criterion) {
    let data = generate_buffer(*SIZES.last().unwrap_or(&0));
    let mut group = c.benchmark_group("imohash");
    for &size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| imohash(black_box(&data[..size])));
        });
    }
    group.finish();
}

fn bench_prefix_digest(c: &mut Criterion) {
    let data = generate_buffer(4096);
    c.bench_function("prefix_digest_4096", |b| {
        b.iter(|| prefix_digest(black_box(&data)));
    });
}

criterion_group!(benches, bench_murmur3, bench_imohash, bench_prefix_digest);
criterion_main!(benches);
