//! AES-NI backend.
//!
//! Same minimal/wide state schedule as `kernels::portable`, re-expressed
//! with `_mm_aesenc_si128` instead of the byte-table round. Every function
//! here is defined by equivalence to the portable reference and is checked
//! against it by the cross-backend consistency tests.

#![allow(clippy::cast_possible_wrap)]
#![allow(unsafe_code)]

use crate::kernels::constants::{PI, SHUFFLE, WIDE_BLOCK_SIZE};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::x86_64::{
    __m128i, _mm_add_epi64, _mm_aesenc_si128, _mm_loadu_si128, _mm_set_epi64x, _mm_set1_epi64x,
    _mm_shuffle_epi8, _mm_storeu_si128, _mm_xor_si128,
};

#[inline]
unsafe fn load_block(bytes: &[u8]) -> __m128i {
    let mut buf = [0u8; 16];
    let n = bytes.len().min(16);
    buf[..n].copy_from_slice(&bytes[..n]);
    _mm_loadu_si128(buf.as_ptr().cast())
}

#[inline]
unsafe fn store_block(v: __m128i) -> [u8; 16] {
    let mut buf = [0u8; 16];
    _mm_storeu_si128(buf.as_mut_ptr().cast(), v);
    buf
}

#[inline]
unsafe fn low64(v: __m128i) -> u64 {
    let b = store_block(v);
    u64::from_le_bytes(b[0..8].try_into().unwrap_or_default())
}

/// Minimal (single 128-bit lane) state, AES-NI flavor.
#[derive(Clone, Copy)]
pub struct AesNiMinimalState {
    aes: __m128i,
    sum: __m128i,
    key: __m128i,
}

impl AesNiMinimalState {
    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn new(seed: u64) -> Self {
        let seed_vec = _mm_set1_epi64x(seed as i64);
        let pi = &PI.0;
        let pi0 = _mm_set_epi64x(pi[1] as i64, pi[0] as i64);
        let pi1 = _mm_set_epi64x(pi[9] as i64, pi[8] as i64);
        Self {
            key: seed_vec,
            aes: _mm_xor_si128(seed_vec, pi0),
            sum: _mm_xor_si128(seed_vec, pi1),
        }
    }

    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn update(&mut self, block: __m128i) {
        let shuffle_mask = load_block(&SHUFFLE);
        self.aes = _mm_aesenc_si128(self.aes, block);
        self.sum = _mm_add_epi64(_mm_shuffle_epi8(self.sum, shuffle_mask), block);
    }

    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn finalize(&self, length: u64) -> u64 {
        let key_with_length = _mm_add_epi64(self.key, _mm_set_epi64x(0, length as i64));
        let mixed_registers = _mm_aesenc_si128(self.sum, self.aes);
        let mixed_within_register = _mm_aesenc_si128(
            _mm_aesenc_si128(mixed_registers, key_with_length),
            mixed_registers,
        );
        low64(mixed_within_register)
    }
}

/// Wide (4 x 128-bit lane) state, AES-NI flavor. AES-NI has no native
/// 512-bit register, so the four lanes are four independent `__m128i`
/// operations, per the design note on backends that lack wide AES.
#[derive(Clone, Copy)]
pub struct AesNiWideState {
    aes: [__m128i; 4],
    sum: [__m128i; 4],
    key: __m128i,
    buffer: [u8; WIDE_BLOCK_SIZE],
    pub ins_length: u64,
}

impl AesNiWideState {
    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn new(seed: u64) -> Self {
        let seed_vec = _mm_set1_epi64x(seed as i64);
        let pi = &PI.0;
        let mut aes = [seed_vec; 4];
        let mut sum = [seed_vec; 4];
        for lane in 0..4 {
            let pi_aes = _mm_set_epi64x(pi[lane * 2 + 1] as i64, pi[lane * 2] as i64);
            let pi_sum = _mm_set_epi64x(pi[8 + lane * 2 + 1] as i64, pi[8 + lane * 2] as i64);
            aes[lane] = _mm_xor_si128(seed_vec, pi_aes);
            sum[lane] = _mm_xor_si128(seed_vec, pi_sum);
        }
        Self {
            aes,
            sum,
            key: seed_vec,
            buffer: [0u8; WIDE_BLOCK_SIZE],
            ins_length: 0,
        }
    }

    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn absorb(&mut self, block: &[u8; WIDE_BLOCK_SIZE]) {
        let shuffle_mask = load_block(&SHUFFLE);
        for lane in 0..4 {
            let b = load_block(&block[lane * 16..lane * 16 + 16]);
            self.aes[lane] = _mm_aesenc_si128(self.aes[lane], b);
            self.sum[lane] = _mm_add_epi64(_mm_shuffle_epi8(self.sum[lane], shuffle_mask), b);
        }
    }

    /// # Safety
    /// Caller must have verified `aes` and `sse2` are available.
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
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
    /// Caller must have verified `aes` and `sse2` are available. Requires
    /// `ins_length >= 64` (callers fold to `AesNiMinimalState` otherwise).
    #[target_feature(enable = "aes")]
    #[target_feature(enable = "sse2")]
    pub unsafe fn finalize(&self) -> u64 {
        // Absorb a zero-padded copy of the pending tail into a scratch copy
        // of the state, without mutating `self`.
        let mut state = *self;
        let progress = (self.ins_length % WIDE_BLOCK_SIZE as u64) as usize;
        if progress != 0 {
            let mut block = [0u8; WIDE_BLOCK_SIZE];
            block[..progress].copy_from_slice(&self.buffer[..progress]);
            state.absorb(&block);
        }
        let key_with_length = _mm_add_epi64(state.key, _mm_set_epi64x(0, self.ins_length as i64));
        let m01 = _mm_aesenc_si128(
            _mm_aesenc_si128(state.sum[0], state.aes[0]),
            _mm_aesenc_si128(state.sum[1], state.aes[1]),
        );
        let m23 = _mm_aesenc_si128(
            _mm_aesenc_si128(state.sum[2], state.aes[2]),
            _mm_aesenc_si128(state.sum[3], state.aes[3]),
        );
        let m = _mm_aesenc_si128(m01, m23);
        low64(_mm_aesenc_si128(_mm_aesenc_si128(m, key_with_length), m))
    }
}
