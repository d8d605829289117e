//! AVX-512 + VAES backend: true 512-bit wide state (one ZMM register holds
//! all four 128-bit lanes at once).

#![allow(clippy::cast_possible_wrap)]
#![allow(unsafe_code)]

use crate::kernels::constants::{PI, SHUFFLE_X4, WIDE_BLOCK_SIZE};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::x86_64::{
    __m512i, _mm512_add_epi64, _mm512_aesenc_epi128, _mm512_loadu_si512, _mm512_shuffle_epi8,
    _mm512_storeu_si512,
};

#[inline]
unsafe fn store(v: __m512i) -> [u8; 64] {
    let mut buf = [0u8; 64];
    _mm512_storeu_si512(buf.as_mut_ptr().cast(), v);
    buf
}

/// Four-lane (512-bit) wide state, AVX-512+VAES flavor.
#[derive(Clone, Copy)]
pub struct Avx512WideState {
    aes: __m512i,
    sum: __m512i,
    key_lo: u64,
    key_hi: u64,
    buffer: [u8; WIDE_BLOCK_SIZE],
    pub ins_length: u64,
}

impl Avx512WideState {
    /// # Safety
    /// Caller must have verified `avx512f`, `avx512bw`, and `vaes`.
    #[target_feature(enable = "avx512f")]
    #[target_feature(enable = "avx512bw")]
    #[target_feature(enable = "vaes")]
    pub unsafe fn new(seed: u64) -> Self {
        let pi = &PI.0;
        let mut aes_bytes = [0u8; 64];
        let mut sum_bytes = [0u8; 64];
        for lane in 0..4 {
            aes_bytes[lane * 16..lane * 16 + 8]
                .copy_from_slice(&(seed ^ pi[lane * 2]).to_le_bytes());
            aes_bytes[lane * 16 + 8..lane * 16 + 16]
                .copy_from_slice(&(seed ^ pi[lane * 2 + 1]).to_le_bytes());
            sum_bytes[lane * 16..lane * 16 + 8]
                .copy_from_slice(&(seed ^ pi[8 + lane * 2]).to_le_bytes());
            sum_bytes[lane * 16 + 8..lane * 16 + 16]
                .copy_from_slice(&(seed ^ pi[8 + lane * 2 + 1]).to_le_bytes());
        }
        Self {
            aes: _mm512_loadu_si512(aes_bytes.as_ptr().cast()),
            sum: _mm512_loadu_si512(sum_bytes.as_ptr().cast()),
            key_lo: seed,
            key_hi: seed,
            buffer: [0u8; WIDE_BLOCK_SIZE],
            ins_length: 0,
        }
    }

    /// # Safety
    /// Caller must have verified `avx512f`, `avx512bw`, and `vaes`.
    #[target_feature(enable = "avx512f")]
    #[target_feature(enable = "avx512bw")]
    #[target_feature(enable = "vaes")]
    pub unsafe fn absorb(&mut self, block: &[u8; WIDE_BLOCK_SIZE]) {
        let shuffle_mask = _mm512_loadu_si512(SHUFFLE_X4.as_ptr().cast());
        let b = _mm512_loadu_si512(block.as_ptr().cast());
        self.aes = _mm512_aesenc_epi128(self.aes, b);
        self.sum = _mm512_add_epi64(_mm512_shuffle_epi8(self.sum, shuffle_mask), b);
    }

    /// # Safety
    /// Caller must have verified `avx512f`, `avx512bw`, and `vaes`.
    #[target_feature(enable = "avx512f")]
    #[target_feature(enable = "avx512bw")]
    #[target_feature(enable = "vaes")]
    pub unsafe fn stream(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            let progress = (self.ins_length % WIDE_BLOCK_SIZE as u64) as usize;
            let to_copy = bytes.len().min(WIDE_BLOCK_SIZE - progress);
            self.buffer[progress..progress + to_copy].copy_from_slice(&bytes[..to_copy]);
            self.ins_length += to_copy as u64;
            bytes = &bytes[to_copy..];
            if progress + to_copy == WIDE_BLOCK_SIZE {
                let block = self.buffer;
                self.absorb(&block);
                self.buffer = [0u8; WIDE_BLOCK_SIZE];
            }
        }
    }

    /// # Safety
    /// Caller must have verified `avx512f`, `avx512bw`, and `vaes`. Requires
    /// `ins_length >= 64`.
    #[target_feature(enable = "avx512f")]
    #[target_feature(enable = "avx512bw")]
    #[target_feature(enable = "vaes")]
    pub unsafe fn finalize(&self) -> u64 {
        use crate::kernels::portable::utils::{aesenc, U128};

        // Absorb a zero-padded copy of the pending tail into a scratch copy
        // of the state, without mutating `self`.
        let mut state = *self;
        let progress = (self.ins_length % WIDE_BLOCK_SIZE as u64) as usize;
        if progress != 0 {
            let mut block = [0u8; WIDE_BLOCK_SIZE];
            block[..progress].copy_from_slice(&self.buffer[..progress]);
            state.absorb(&block);
        }

        let aes = store(state.aes);
        let sum = store(state.sum);
        let lane = |bytes: &[u8; 64], i: usize| U128::from_bytes(&bytes[i * 16..i * 16 + 16]);

        let key_with_length =
            U128::from_u64s(self.key_lo.wrapping_add(self.ins_length), self.key_hi);
        let m01 = aesenc(
            aesenc(lane(&sum, 0), lane(&aes, 0)),
            aesenc(lane(&sum, 1), lane(&aes, 1)),
        );
        let m23 = aesenc(
            aesenc(lane(&sum, 2), lane(&aes, 2)),
            aesenc(lane(&sum, 3), lane(&aes, 3)),
        );
        let m = aesenc(m01, m23);
        aesenc(aesenc(m, key_with_length), m).lo()
    }
}
