//! Portable, scalar reference implementation.
//!
//! Every hardware backend (AES-NI, AVX2, AVX-512, NEON) is defined as a
//! width-parametrized re-expression of the exact schedule below: one AES
//! round, one shuffle-and-add, applied to absorb each block. This module has
//! no CPU-feature requirements and is the fallback when the dispatcher finds
//! nothing better, and the golden reference every other backend is checked
//! against.

pub mod utils;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::kernels::constants::{BYTESUM_HUGE_THRESHOLD, PI, SHUFFLE, WIDE_BLOCK_SIZE};
use utils::{aesenc, shift_right_bytes, U128};

// =============================================================================
// BYTE CHECKSUM (C3)
// =============================================================================

/// Sum of all bytes in `text`, as an unsigned 64-bit accumulator.
///
/// The portable path doesn't have the SIMD SAD-reduction tiers hardware
/// backends use (see `kernels::avx2::bytesum`, `kernels::avx512::bytesum`)
/// but must agree with them bit-for-bit, which for plain addition is
/// automatic regardless of traversal order or direction.
pub fn bytesum(text: &[u8]) -> u64 {
    if text.len() >= BYTESUM_HUGE_THRESHOLD {
        // Bidirectional traversal keeps the working set naturally split
        // across two streams even without non-temporal load instructions;
        // cache-friendliness here is cosmetic on the scalar path, but
        // keeping the traversal shape matches what the SIMD backends do.
        let mut lo = 0u64;
        let mut hi = 0u64;
        let mut left = 0usize;
        let mut right = text.len();
        while left < right {
            lo += u64::from(text[left]);
            right -= 1;
            hi += u64::from(text[right]);
            left += 1;
        }
        if left == right {
            // Odd length: the middle byte was counted by neither half.
        }
        lo + hi
    } else {
        text.iter().map(|&b| u64::from(b)).sum()
    }
}

// =============================================================================
// MINIMAL STATE (C4)
// =============================================================================

/// Single-lane (128-bit) absorber used for inputs of 64 bytes or fewer, and
/// as the target of the wide-state fold for short streams.
#[derive(Clone, Copy, Debug)]
pub struct MinimalState {
    pub aes: U128,
    pub sum: U128,
    pub key: U128,
}

impl MinimalState {
    pub fn new(seed: u64) -> Self {
        let key = U128::from_u64s(seed, seed);
        let aes = U128::from_u64s(seed ^ PI.0[0], seed ^ PI.0[1]);
        let sum = U128::from_u64s(seed ^ PI.0[8], seed ^ PI.0[9]);
        Self { aes, sum, key }
    }

    pub fn update(&mut self, block: U128) {
        self.aes = aesenc(self.aes, block);
        self.sum = self.sum.shuffle(&SHUFFLE).add_epi64(&block);
    }

    pub fn finalize(&self, length: u64) -> u64 {
        let key_with_length = self.key.add_epi64(&U128::from_u64s(length, 0));
        let mixed_registers = aesenc(self.sum, self.aes);
        let mixed_within_register =
            aesenc(aesenc(mixed_registers, key_with_length), mixed_registers);
        mixed_within_register.lo()
    }
}

// =============================================================================
// WIDE STATE (C5)
// =============================================================================

/// Four-lane (512-bit) absorber used for the streaming API and for inputs
/// longer than 64 bytes.
#[derive(Clone, Copy, Debug)]
pub struct WideState {
    pub aes: [U128; 4],
    pub sum: [U128; 4],
    pub key: U128,
    pub buffer: [u8; WIDE_BLOCK_SIZE],
    pub ins_length: u64,
}

impl WideState {
    pub fn new(seed: u64) -> Self {
        let key = U128::from_u64s(seed, seed);
        let mut aes = [U128::zero(); 4];
        let mut sum = [U128::zero(); 4];
        for lane in 0..4 {
            aes[lane] = U128::from_u64s(seed ^ PI.0[lane * 2], seed ^ PI.0[lane * 2 + 1]);
            sum[lane] = U128::from_u64s(seed ^ PI.0[8 + lane * 2], seed ^ PI.0[8 + lane * 2 + 1]);
        }
        Self {
            aes,
            sum,
            key,
            buffer: [0u8; WIDE_BLOCK_SIZE],
            ins_length: 0,
        }
    }

    /// Absorb one full 64-byte block (4 lanes of 16 bytes each).
    pub fn absorb(&mut self, block: &[u8; WIDE_BLOCK_SIZE]) {
        for lane in 0..4 {
            let lane_block = U128::from_bytes(&block[lane * 16..lane * 16 + 16]);
            self.aes[lane] = aesenc(self.aes[lane], lane_block);
            self.sum[lane] = self.sum[lane].shuffle(&SHUFFLE).add_epi64(&lane_block);
        }
    }

    /// Append `bytes` into the staging buffer, absorbing whenever it fills.
    pub fn stream(&mut self, mut bytes: &[u8]) {
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

    /// Fold to a minimal state, valid only when fewer than 64 bytes have ever
    /// been absorbed (lanes 1..=3 are then provably untouched).
    pub fn fold_to_minimal(&self) -> MinimalState {
        debug_assert!(self.ins_length < WIDE_BLOCK_SIZE as u64);
        MinimalState {
            aes: self.aes[0],
            sum: self.sum[0],
            key: self.key,
        }
    }

    pub fn finalize(&self) -> u64 {
        if self.ins_length < WIDE_BLOCK_SIZE as u64 {
            let minimal = self.fold_to_minimal();
            return hash_short_from_minimal(minimal, self.buffer_tail(), self.ins_length);
        }
        // Absorb a zero-padded copy of the pending tail into a scratch copy
        // of the state, exactly as `oneshot_wide` does, without mutating
        // `self`: `digest()` must be idempotent and side-effect-free.
        let mut state = *self;
        let progress = (self.ins_length % WIDE_BLOCK_SIZE as u64) as usize;
        if progress != 0 {
            let mut block = [0u8; WIDE_BLOCK_SIZE];
            block[..progress].copy_from_slice(&self.buffer[..progress]);
            state.absorb(&block);
        }
        let key_with_length = state.key.add_epi64(&U128::from_u64s(self.ins_length, 0));
        let m01 = aesenc(
            aesenc(state.sum[0], state.aes[0]),
            aesenc(state.sum[1], state.aes[1]),
        );
        let m23 = aesenc(
            aesenc(state.sum[2], state.aes[2]),
            aesenc(state.sum[3], state.aes[3]),
        );
        let m = aesenc(m01, m23);
        let mixed_within_register = aesenc(aesenc(m, key_with_length), m);
        mixed_within_register.lo()
    }

    fn buffer_tail(&self) -> &[u8] {
        let progress = (self.ins_length % WIDE_BLOCK_SIZE as u64) as usize;
        &self.buffer[..progress]
    }
}

/// Finalize a minimal state that still has `tail` pending bytes which have
/// not yet been absorbed (used by the wide-state short-stream fold path).
fn hash_short_from_minimal(mut state: MinimalState, tail: &[u8], total_length: u64) -> u64 {
    absorb_minimal_blocks(&mut state, tail);
    state.finalize(total_length)
}

/// Absorb `data` (0..=48 extra bytes beyond what the caller already folded
/// into `state`) as 1..=3 zero-padded/tail-shifted 16-byte blocks, following
/// the same one-shot size-class table as `oneshot_direct` for `0 < L <= 64`.
fn absorb_minimal_blocks(state: &mut MinimalState, data: &[u8]) {
    if data.is_empty() {
        return;
    }
    let blocks = load_minimal_blocks(data);
    for block in blocks {
        state.update(block);
    }
}

/// Load `data` (`1..=64` bytes) as the sequence of 128-bit blocks the
/// one-shot minimal path would update with, including the tail-shift trick
/// for the final overlapping block.
fn load_minimal_blocks(data: &[u8]) -> Vec<U128> {
    let len = data.len();
    debug_assert!(len >= 1 && len <= 64);
    if len <= 16 {
        let mut buf = [0u8; 16];
        buf[..len].copy_from_slice(data);
        return vec![U128 { b: buf }];
    }
    let full_blocks = (len - 1) / 16; // number of non-overlapping 16-byte blocks before the tail
    let mut out = Vec::with_capacity(full_blocks + 1);
    for i in 0..full_blocks {
        out.push(U128::from_bytes(&data[i * 16..i * 16 + 16]));
    }
    let nominal = (full_blocks + 1) * 16;
    let tail_start = len - 16;
    let tail_block = U128::from_bytes(&data[tail_start..len]);
    let shift = (nominal - len) as u32;
    out.push(shift_right_bytes(tail_block, shift));
    out
}

// =============================================================================
// ONE-SHOT HASH (C6)
// =============================================================================

/// `hash(bytes, seed) -> u64`, routed by length per the size-class table.
pub fn hash(text: &[u8], seed: u64) -> u64 {
    let len = text.len();
    if len <= 64 {
        oneshot_short(text, seed)
    } else {
        oneshot_wide(text, seed)
    }
}

fn oneshot_short(text: &[u8], seed: u64) -> u64 {
    let mut state = MinimalState::new(seed);
    if !text.is_empty() {
        for block in load_minimal_blocks(text) {
            state.update(block);
        }
    }
    state.finalize(text.len() as u64)
}

fn oneshot_wide(text: &[u8], seed: u64) -> u64 {
    let mut state = WideState::new(seed);
    let mut rest = text;
    while rest.len() >= WIDE_BLOCK_SIZE {
        let (block, tail) = rest.split_at(WIDE_BLOCK_SIZE);
        let mut buf = [0u8; WIDE_BLOCK_SIZE];
        buf.copy_from_slice(block);
        state.absorb(&buf);
        state.ins_length += WIDE_BLOCK_SIZE as u64;
        rest = tail;
    }
    if !rest.is_empty() {
        let mut buf = [0u8; WIDE_BLOCK_SIZE];
        buf[..rest.len()].copy_from_slice(rest);
        state.absorb(&buf);
    }
    state.ins_length = text.len() as u64;
    finalize_wide_full(&state)
}

/// Finalize assuming the caller has already ensured >= 64 bytes were
/// absorbed (used by the one-shot wide path, which always absorbs at least
/// one full block before finalizing since it's only reached for `L > 64`).
fn finalize_wide_full(state: &WideState) -> u64 {
    let key_with_length = state.key.add_epi64(&U128::from_u64s(state.ins_length, 0));
    let m01 = aesenc(
        aesenc(state.sum[0], state.aes[0]),
        aesenc(state.sum[1], state.aes[1]),
    );
    let m23 = aesenc(
        aesenc(state.sum[2], state.aes[2]),
        aesenc(state.sum[3], state.aes[3]),
    );
    let m = aesenc(m01, m23);
    aesenc(aesenc(m, key_with_length), m).lo()
}

// =============================================================================
// PRNG (C7)
// =============================================================================

/// Fill `out` with deterministic pseudo-random bytes derived from `nonce`.
pub fn generate(out: &mut [u8], nonce: u64) {
    let mut offset = 0usize;
    let mut i: u64 = 0;
    while offset < out.len() {
        let input = U128::from_u64s(nonce.wrapping_add(i), nonce.wrapping_add(i));
        let pair = (i % 4) as usize;
        let key = U128::from_u64s(nonce ^ PI.0[2 * pair], nonce ^ PI.0[2 * pair + 1]);
        let block = aesenc(input, key);
        let take = (out.len() - offset).min(16);
        out[offset..offset + take].copy_from_slice(&block.b[..take]);
        offset += take;
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytesum_hi_is_209() {
        assert_eq!(bytesum(b"hi"), 209);
    }

    #[test]
    fn bytesum_concatenation_is_additive() {
        let a = b"hello, ".to_vec();
        let b = b"world!".to_vec();
        let mut both = a.clone();
        both.extend_from_slice(&b);
        assert_eq!(bytesum(&both), bytesum(&a) + bytesum(&b));
    }

    #[test]
    fn hash_distinguishes_hello_world() {
        assert_ne!(hash(b"hello", 0), hash(b"world", 0));
    }

    #[test]
    fn hash_empty_is_deterministic() {
        assert_eq!(hash(b"", 0), hash(b"", 0));
    }

    #[test]
    fn generate_is_deterministic() {
        let mut a = [0u8; 5];
        let mut b = [0u8; 5];
        generate(&mut a, 0);
        generate(&mut b, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn huge_bytesum_distinguishes_zero_and_ff() {
        let zeros = vec![0u8; 1024 * 1024];
        let ones = vec![0xFFu8; 1024 * 1024];
        assert_ne!(hash(&zeros, 0), hash(&ones, 0));
        assert_eq!(bytesum(&zeros), 0);
        assert_eq!(bytesum(&ones), 255 * 1024 * 1024);
    }

    #[test]
    fn streaming_matches_one_shot_across_block_boundary() {
        use crate::streaming::HashState;
        let whole = b"abcdefgh";
        let mut st = HashState::new(42);
        st.update(b"abc");
        st.update(b"de");
        st.update(b"fgh");
        assert_eq!(st.digest(), hash(whole, 42));
    }

    #[test]
    fn streaming_fold_boundary_lengths() {
        use crate::streaming::HashState;
        for len in [1usize, 63, 64, 65] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let mut st = HashState::new(7);
            st.update(&data);
            assert_eq!(st.digest(), hash(&data, 7), "length {len}");
        }
    }
}
