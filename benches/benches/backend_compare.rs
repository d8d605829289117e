//! Backend comparison benchmark.
//!
//! Compares the runtime dispatcher's selected backend against each explicit
//! kernel, to quantify the cost of dispatch overhead and of falling back to
//! a less capable backend.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use voltahash::kernels;

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("backends");

    // Small (7B): dispatch overhead vs short path.
    // Medium (1KB): L1 cache hot path.
    // Large (256KB): bulk throughput (AVX-512 saturation).
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("dispatcher - {size} bytes"), |b| {
            b.iter(|| voltahash::hash(black_box(&input), 0));
        });

        if is_x86_feature_detected!("avx512f")
            && is_x86_feature_detected!("avx512bw")
            && is_x86_feature_detected!("vaes")
        {
            group.bench_function(format!("avx512+vaes - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::avx512::oneshot(black_box(&input), 0) });
            });
        }

        if is_x86_feature_detected!("aes") {
            group.bench_function(format!("aes-ni - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::aesni::oneshot(black_box(&input), 0) });
            });
        }

        group.bench_function(format!("portable - {size} bytes"), |b| {
            b.iter(|| kernels::portable::hash(black_box(&input), 0));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
