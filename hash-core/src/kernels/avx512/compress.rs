//! AVX-512 byte checksum (C3): SAD-based reduction over 64-byte registers,
//! with a bidirectional non-temporal-load path for huge buffers.

#![allow(unsafe_code)]

use crate::kernels::constants::BYTESUM_HUGE_THRESHOLD;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::x86_64::{
    __m512i, _mm512_add_epi64, _mm512_loadu_si512, _mm512_reduce_add_epi64, _mm512_sad_epu8,
    _mm512_setzero_si512, _mm512_stream_load_si512,
};

/// # Safety
/// Caller must have verified `avx512f` and `avx512bw`.
#[target_feature(enable = "avx512f")]
#[target_feature(enable = "avx512bw")]
pub unsafe fn bytesum(text: &[u8]) -> u64 {
    let len = text.len();
    if len < 64 {
        return text.iter().map(|&b| u64::from(b)).sum();
    }

    if len < BYTESUM_HUGE_THRESHOLD {
        let mut sums: __m512i = _mm512_setzero_si512();
        let mut ptr = text.as_ptr();
        let mut remaining = len;
        while remaining >= 64 {
            let v = _mm512_loadu_si512(ptr.cast());
            sums = _mm512_add_epi64(sums, _mm512_sad_epu8(v, _mm512_setzero_si512()));
            ptr = ptr.add(64);
            remaining -= 64;
        }
        let mut total = _mm512_reduce_add_epi64(sums) as u64;
        if remaining > 0 {
            let tail = core::slice::from_raw_parts(ptr, remaining);
            total += tail.iter().map(|&b| u64::from(b)).sum::<u64>();
        }
        total
    } else {
        // Bidirectional traversal to spread the working set across two
        // streams and avoid polluting the cache with a buffer this large.
        let base = text.as_ptr();
        let mut forward_sums = _mm512_setzero_si512();
        let mut backward_sums = _mm512_setzero_si512();
        let mut body = len;
        let mut front_off = 0usize;
        while body >= 128 {
            let fwd = _mm512_stream_load_si512(base.add(front_off).cast());
            forward_sums = _mm512_add_epi64(forward_sums, _mm512_sad_epu8(fwd, _mm512_setzero_si512()));
            let bwd = _mm512_stream_load_si512(base.add(front_off + body - 64).cast());
            backward_sums =
                _mm512_add_epi64(backward_sums, _mm512_sad_epu8(bwd, _mm512_setzero_si512()));
            front_off += 64;
            body -= 128;
        }
        let mut total = _mm512_reduce_add_epi64(_mm512_add_epi64(forward_sums, backward_sums)) as u64;
        if body >= 64 {
            let v = _mm512_stream_load_si512(base.add(front_off).cast());
            total += _mm512_reduce_add_epi64(_mm512_sad_epu8(v, _mm512_setzero_si512())) as u64;
            front_off += 64;
            body -= 64;
        }
        if body > 0 {
            let tail = core::slice::from_raw_parts(base.add(front_off), body);
            total += tail.iter().map(|&b| u64::from(b)).sum::<u64>();
        }
        total
    }
}
