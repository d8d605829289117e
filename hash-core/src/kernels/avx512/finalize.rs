//! AVX-512+VAES public entry point.

#![allow(unsafe_code)]

use super::state::Avx512WideState;
use crate::kernels::aesni::short::oneshot_short;
use crate::kernels::constants::WIDE_BLOCK_SIZE;

/// # Safety
/// Caller must have verified `avx512f`, `avx512bw`, `vaes`, `aes`, and
/// `sse2` (the short path below 64 bytes reuses the AES-NI minimal-state
/// kernel, which is always present alongside VAES in practice).
#[target_feature(enable = "avx512f")]
#[target_feature(enable = "avx512bw")]
#[target_feature(enable = "vaes")]
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
pub unsafe fn oneshot(text: &[u8], seed: u64) -> u64 {
    if text.len() <= 64 {
        return oneshot_short(text, seed);
    }
    let mut state = Avx512WideState::new(seed);
    let mut rest = text;
    while rest.len() >= WIDE_BLOCK_SIZE {
        let (block, tail) = rest.split_at(WIDE_BLOCK_SIZE);
        let mut buf = [0u8; WIDE_BLOCK_SIZE];
        buf.copy_from_slice(block);
        state.absorb(&buf);
        rest = tail;
    }
    if !rest.is_empty() {
        let mut buf = [0u8; WIDE_BLOCK_SIZE];
        buf[..rest.len()].copy_from_slice(rest);
        state.absorb(&buf);
    }
    state.ins_length = text.len() as u64;
    state.finalize()
}
