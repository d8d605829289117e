//! Cross-architecture consistency tests.
//!
//! Verifies that AES-NI, AVX-512, and the portable reference produce
//! identical digests, and that the runtime dispatcher's auto-selected
//! backend always agrees with the portable reference.

#![allow(unsafe_code)]

use voltahash::kernels;

fn is_avx512_supported() -> bool {
    is_x86_feature_detected!("avx512f")
        && is_x86_feature_detected!("avx512bw")
        && is_x86_feature_detected!("vaes")
        && is_x86_feature_detected!("aes")
}

fn is_aesni_supported() -> bool {
    is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")
}

#[test]
fn aesni_matches_portable() {
    if !is_aesni_supported() {
        println!("skipping: aes-ni not supported on this host");
        return;
    }
    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("empty", vec![]),
        ("small", b"voltahash".to_vec()),
        ("exact block (64)", vec![0u8; 64]),
        ("exact block (512)", vec![1u8; 512]),
        ("unaligned (63)", vec![2u8; 63]),
        ("unaligned (513)", vec![3u8; 513]),
        ("large (1024)", vec![1u8; 1024]),
        ("prime length (101)", vec![0u8; 101]),
    ];
    for (name, input) in scenarios {
        let expected = kernels::portable::hash(&input, 0);
        // SAFETY: feature support checked above.
        let actual = unsafe { kernels::aesni::oneshot(&input, 0) };
        assert_eq!(actual, expected, "mismatch for {name}");
    }
}

#[test]
fn avx512_matches_portable() {
    if !is_avx512_supported() {
        println!("skipping: avx512+vaes not supported on this host");
        return;
    }
    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("empty", vec![]),
        ("small", b"voltahash".to_vec()),
        ("exact block (64)", vec![0u8; 64]),
        ("exact block (512)", vec![1u8; 512]),
        ("unaligned (63)", vec![2u8; 63]),
        ("unaligned (513)", vec![3u8; 513]),
    ];
    for (name, input) in scenarios {
        let expected = kernels::portable::hash(&input, 0);
        // SAFETY: feature support checked above.
        let actual = unsafe { kernels::avx512::oneshot(&input, 0) };
        assert_eq!(actual, expected, "mismatch for {name}");
    }
}

#[test]
fn seeded_digests_agree_across_backends() {
    let seeds = [0, 1, 0xDEAD_BEEF, u64::MAX, 0x5555_5555_5555_5555];
    let input = b"SeededInputData";
    for seed in seeds {
        let expected = kernels::portable::hash(input, seed);
        if is_aesni_supported() {
            // SAFETY: feature support checked above.
            assert_eq!(unsafe { kernels::aesni::oneshot(input, seed) }, expected);
        }
        if is_avx512_supported() {
            // SAFETY: feature support checked above.
            assert_eq!(unsafe { kernels::avx512::oneshot(input, seed) }, expected);
        }
    }
}

#[test]
fn auto_dispatch_matches_portable() {
    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("empty", vec![]),
        ("small (9 bytes)", b"voltahash".to_vec()),
        ("exact block (64)", vec![0u8; 64]),
        ("exact block (512)", vec![1u8; 512]),
        ("unaligned (63)", vec![2u8; 63]),
        ("unaligned (513)", vec![3u8; 513]),
        ("medium (1000)", vec![0u8; 1000]),
        ("large (1MiB - 1)", vec![0xAAu8; 1024 * 1024 - 1]),
    ];
    for (name, input) in scenarios {
        let auto = voltahash::hash(&input, 0);
        let portable = kernels::portable::hash(&input, 0);
        assert_eq!(auto, portable, "mismatch auto vs portable: {name}");
    }
}

#[test]
fn auto_dispatch_matches_portable_on_random_lengths() {
    let mut rng: u64 = 0xDEAD_BEEF_CAFE_BABE;
    let mut next_u64 = || {
        rng = rng.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        rng
    };
    for _ in 0..100 {
        let len = (next_u64() % 8192) as usize;
        let mut input = vec![0u8; len];
        for b in &mut input {
            *b = (next_u64() & 0xFF) as u8;
        }
        let auto = voltahash::hash(&input, 0);
        let portable = kernels::portable::hash(&input, 0);
        assert_eq!(auto, portable, "mismatch at len={len}");
    }
}
