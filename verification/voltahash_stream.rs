//! `PractRand` stream generator and cross-backend differential checker.
//!
//! Default mode hashes an incrementing 64-bit counter and writes the raw
//! digest bytes to stdout for piping into `PractRand`. `--cross-arch`
//! instead re-hashes a fixed golden corpus through every compiled-in
//! backend and diffs the results against the portable reference.

#![allow(unsafe_code)]

use clap::Parser;
use std::io::{self, Write};
use voltahash::kernels;

#[derive(Parser)]
#[command(name = "voltahash_stream")]
struct Cli {
    /// Input size in bytes per hash call, or "cyclic" to rotate through
    /// 16/32/64/128 bytes.
    #[arg(default_value = "64")]
    mode: String,

    /// Re-hash a golden corpus through every backend and diff against the
    /// portable reference instead of streaming for `PractRand`.
    #[arg(long)]
    cross_arch: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.cross_arch {
        run_cross_arch();
        return Ok(());
    }

    run_stream(&cli.mode)
}

fn run_stream(mode: &str) -> anyhow::Result<()> {
    let mut counter: u64 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    loop {
        let size = match mode {
            "cyclic" => match counter % 4 {
                0 => 16,
                1 => 32,
                2 => 64,
                _ => 128,
            },
            s => s.parse::<usize>().unwrap_or(64),
        };

        let mut input = vec![0u8; size];
        let counter_bytes = counter.to_le_bytes();
        for (i, byte) in input.iter_mut().enumerate() {
            *byte = counter_bytes[i % 8];
        }

        let digest = voltahash::hash(&input, 0);
        if handle.write_all(&digest.to_le_bytes()).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }
    Ok(())
}

fn golden_corpus() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("empty", vec![]),
        ("one byte", vec![0x42]),
        ("exact minimal block (16)", vec![0xAB; 16]),
        ("unaligned (63)", vec![0x11; 63]),
        ("exact wide block (64)", vec![0x22; 64]),
        ("unaligned (65)", vec![0x33; 65]),
        ("several wide blocks (513)", vec![0x44; 513]),
        ("large (1 MiB)", vec![0x55; 1024 * 1024]),
    ]
}

fn run_cross_arch() {
    println!("Diffing every compiled-in backend against the portable reference...");
    let mut mismatches = 0usize;

    for (name, input) in golden_corpus() {
        let reference = kernels::portable::hash(&input, 0);

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
                // SAFETY: feature support checked above.
                let got = unsafe { kernels::aesni::oneshot(&input, 0) };
                report("aes-ni", name, &input, reference, got, &mut mismatches);
            }
            if is_x86_feature_detected!("avx512f")
                && is_x86_feature_detected!("avx512bw")
                && is_x86_feature_detected!("vaes")
            {
                // SAFETY: feature support checked above.
                let got = unsafe { kernels::avx512::oneshot(&input, 0) };
                report("avx512+vaes", name, &input, reference, got, &mut mismatches);
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("aes") {
                // SAFETY: feature support checked above.
                let got = unsafe { kernels::neon::oneshot(&input, 0) };
                report("neon+crypto", name, &input, reference, got, &mut mismatches);
            }
        }
    }

    if mismatches == 0 {
        println!("All backends agree with the portable reference.");
    } else {
        eprintln!("{mismatches} mismatch(es) found");
        std::process::exit(1);
    }
}

fn report(
    backend: &str,
    name: &str,
    input: &[u8],
    reference: u64,
    got: u64,
    mismatches: &mut usize,
) {
    if got == reference {
        println!("[{backend}] {name} ({} bytes): OK", input.len());
    } else {
        println!(
            "[{backend}] {name} ({} bytes): MISMATCH expected {reference:#018x} got {got:#018x}",
            input.len()
        );
        *mismatches += 1;
    }
}
