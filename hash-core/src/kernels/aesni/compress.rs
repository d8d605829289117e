//! AES-NI wide-input path: absorbing 64-byte blocks into the 4-lane state
//! ahead of finalization.

#![allow(unsafe_code)]

use super::state::AesNiWideState;
use crate::kernels::constants::WIDE_BLOCK_SIZE;

/// # Safety
/// Caller must have verified `aes` and `sse2` are available.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
pub unsafe fn oneshot_wide(text: &[u8], seed: u64) -> u64 {
    let mut state = AesNiWideState::new(seed);
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
