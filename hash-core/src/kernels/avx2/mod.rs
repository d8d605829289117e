//! AVX2 backend.
//!
//! AVX2 has no AES instruction without VAES, so this backend contributes
//! only `bytesum` (C3); hashing on an AVX2-only host falls back to AES-NI
//! or portable. The SAD-reduction and bidirectional-traversal shapes mirror
//! the AVX-512 backend at half the register width.

#![allow(unsafe_code)]

use crate::kernels::constants::BYTESUM_HUGE_THRESHOLD;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::x86_64::{
    __m256i, _mm256_add_epi64, _mm256_castsi256_si128, _mm256_extracti128_si256,
    _mm256_lddqu_si256, _mm256_sad_epu8, _mm256_setzero_si256, _mm256_stream_load_si256,
    _mm_add_epi64, _mm_cvtsi128_si64, _mm_extract_epi64,
};

#[inline]
unsafe fn reduce(v: __m256i) -> u64 {
    let low = _mm256_castsi256_si128(v);
    let high = _mm256_extracti128_si256(v, 1);
    let sums = _mm_add_epi64(low, high);
    (_mm_cvtsi128_si64(sums) as u64).wrapping_add(_mm_extract_epi64(sums, 1) as u64)
}

/// # Safety
/// Caller must have verified `avx2`.
#[target_feature(enable = "avx2")]
pub unsafe fn bytesum(text: &[u8]) -> u64 {
    let len = text.len();
    if len < 32 {
        return text.iter().map(|&b| u64::from(b)).sum();
    }

    if len < BYTESUM_HUGE_THRESHOLD {
        let mut sums = _mm256_setzero_si256();
        let mut ptr = text.as_ptr();
        let mut remaining = len;
        while remaining >= 32 {
            let v = _mm256_lddqu_si256(ptr.cast());
            sums = _mm256_add_epi64(sums, _mm256_sad_epu8(v, _mm256_setzero_si256()));
            ptr = ptr.add(32);
            remaining -= 32;
        }
        let mut total = reduce(sums);
        if remaining > 0 {
            let tail = core::slice::from_raw_parts(ptr, remaining);
            total += tail.iter().map(|&b| u64::from(b)).sum::<u64>();
        }
        total
    } else {
        let base = text.as_ptr();
        let mut forward = _mm256_setzero_si256();
        let mut backward = _mm256_setzero_si256();
        let mut body = len;
        let mut front_off = 0usize;
        while body >= 64 {
            let fwd = _mm256_stream_load_si256(base.add(front_off).cast());
            forward = _mm256_add_epi64(forward, _mm256_sad_epu8(fwd, _mm256_setzero_si256()));
            let bwd = _mm256_stream_load_si256(base.add(front_off + body - 32).cast());
            backward = _mm256_add_epi64(backward, _mm256_sad_epu8(bwd, _mm256_setzero_si256()));
            front_off += 32;
            body -= 64;
        }
        let mut total = reduce(_mm256_add_epi64(forward, backward));
        if body >= 32 {
            let v = _mm256_stream_load_si256(base.add(front_off).cast());
            total += reduce(_mm256_sad_epu8(v, _mm256_setzero_si256()));
            front_off += 32;
            body -= 32;
        }
        if body > 0 {
            let tail = core::slice::from_raw_parts(base.add(front_off), body);
            total += tail.iter().map(|&b| u64::from(b)).sum::<u64>();
        }
        total
    }
}
