//! Comprehensive criterion benchmark.
//!
//! Statistically rigorous throughput measurements across the length classes
//! named in property 5, plus comparisons against blake3/sha2/gxhash/xxh3.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const MB: usize = 1024 * 1024;

/// Length classes from property 5 plus the large-buffer classes from S6.
const SMALL_SIZES: [usize; 12] = [1, 8, 16, 17, 31, 32, 33, 63, 64, 65, 128, 1024];
const LARGE_SIZES: [usize; 2] = [MB, 16 * MB];

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill(&mut buf[..]);
    buf
}

fn bench_small_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("small-lengths");
    for size in SMALL_SIZES {
        let input = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("voltahash", size), &input, |b, data| {
            b.iter(|| voltahash::hash(black_box(data), 0));
        });
    }
    group.finish();
}

fn bench_large_buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("large-buffers");
    group.sample_size(30);
    for size in LARGE_SIZES {
        let input = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("voltahash", size), &input, |b, data| {
            b.iter(|| voltahash::hash(black_box(data), 0));
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    group.sample_size(30);

    let test_cases = [
        (MB, 4 * 1024, "1MB-4KB-chunks"),
        (MB, 64 * 1024, "1MB-64KB-chunks"),
        (16 * MB, 64 * 1024, "16MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_bytes(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut state = voltahash::HashState::new(0);
                    for chunk in data.chunks(*chunk_sz) {
                        state.update(black_box(chunk));
                    }
                    state.digest()
                });
            },
        );
    }
    group.finish();
}

fn bench_vs_other_hashes(c: &mut Criterion) {
    let mut group = c.benchmark_group("vs-other-hashes");
    let sizes = [64, 1024, MB];

    for size in sizes {
        let input = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("voltahash", size), &input, |b, data| {
            b.iter(|| voltahash::hash(black_box(data), 0));
        });
        group.bench_with_input(BenchmarkId::new("blake3", size), &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("sha256", size), &input, |b, data| {
            use sha2::Digest;
            b.iter(|| {
                let mut hasher = sha2::Sha256::new();
                hasher.update(black_box(data));
                hasher.finalize()
            });
        });
        group.bench_with_input(BenchmarkId::new("gxhash", size), &input, |b, data| {
            b.iter(|| gxhash::gxhash64(black_box(data), 0));
        });
        group.bench_with_input(BenchmarkId::new("xxh3", size), &input, |b, data| {
            b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(data)));
        });
    }
    group.finish();
}

fn bench_bytesum(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytesum");
    for size in [1024, MB, 16 * MB] {
        let input = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("voltahash", size), &input, |b, data| {
            b.iter(|| voltahash::bytesum(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_small_lengths,
    bench_large_buffers,
    bench_streaming,
    bench_vs_other_hashes,
    bench_bytesum,
);
criterion_main!(benches);
