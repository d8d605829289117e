//! Bytes-per-cycle benchmark.
//!
//! Measures algorithmic efficiency using the RDTSC cycle counter, comparing
//! voltahash against blake3, sha2, gxhash, and xxh3.

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unwrap_used)]

use std::arch::x86_64::_rdtsc;
use std::hint::black_box;

/// Measure RDTSC overhead to subtract from measurements.
fn measure_overhead(iterations: u64) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        black_box(0);
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

fn measure<F: Fn(&[u8])>(input: &[u8], iterations: u64, f: F) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        f(black_box(input));
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

fn main() {
    println!("BENCHMARK: bytes/cycle across hash families");
    println!("{}", "=".repeat(100));
    println!(
        "{:<12} | {:<12} | {:<12} | {:<12} | {:<12} | {:<12}",
        "Size", "voltahash", "blake3", "sha256", "gxhash", "xxh3"
    );
    println!("{}", "-".repeat(100));

    let overhead = measure_overhead(1_000_000);

    let sizes = [1024, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024];

    for &size in &sizes {
        let input = vec![0u8; size];
        let iterations: u64 = if size < 4096 {
            500_000
        } else if size < 1024 * 1024 {
            10_000
        } else {
            200
        };

        let v = size as f64
            / (measure(&input, iterations, |d| {
                black_box(voltahash::hash(d, 0));
            }) - overhead)
                .max(1.0);
        let b = size as f64
            / (measure(&input, iterations, |d| {
                black_box(blake3::hash(d));
            }) - overhead)
                .max(1.0);
        let s = size as f64
            / (measure(&input, iterations, |d| {
                use sha2::Digest;
                let mut hasher = sha2::Sha256::new();
                hasher.update(d);
                black_box(hasher.finalize());
            }) - overhead)
                .max(1.0);
        let g = size as f64
            / (measure(&input, iterations, |d| {
                black_box(gxhash::gxhash64(d, 0));
            }) - overhead)
                .max(1.0);
        let x = size as f64
            / (measure(&input, iterations, |d| {
                black_box(xxhash_rust::xxh3::xxh3_64(d));
            }) - overhead)
                .max(1.0);

        println!(
            "{:<12} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2}",
            format!("{size} B"),
            v,
            b,
            s,
            g,
            x
        );
    }
    println!("{}", "=".repeat(100));
    println!("* Values in bytes/cycle (higher is better).");
}
