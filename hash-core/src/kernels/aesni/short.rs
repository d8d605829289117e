//! AES-NI short path: inputs of 64 bytes or fewer, using the minimal
//! (single-lane) state.

#![allow(unsafe_code)]

use super::state::AesNiMinimalState;
use crate::kernels::portable::utils::{shift_right_bytes, U128};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::arch::x86_64::_mm_loadu_si128;

/// Load `data` (1..=64 bytes) as the same sequence of tail-shifted 128-bit
/// blocks the portable reference would update with.
fn load_minimal_blocks(data: &[u8]) -> heapless_blocks::Blocks {
    let len = data.len();
    debug_assert!((1..=64).contains(&len));
    let mut blocks = heapless_blocks::Blocks::default();
    if len <= 16 {
        let mut buf = [0u8; 16];
        buf[..len].copy_from_slice(data);
        blocks.push(U128 { b: buf });
        return blocks;
    }
    let full_blocks = (len - 1) / 16;
    for i in 0..full_blocks {
        blocks.push(U128::from_bytes(&data[i * 16..i * 16 + 16]));
    }
    let nominal = (full_blocks + 1) * 16;
    let tail_start = len - 16;
    let tail_block = U128::from_bytes(&data[tail_start..len]);
    let shift = (nominal - len) as u32;
    blocks.push(shift_right_bytes(tail_block, shift));
    blocks
}

/// A fixed-capacity (max 4 elements) block list, avoiding heap allocation on
/// the hot short-input path.
mod heapless_blocks {
    use crate::kernels::portable::utils::U128;

    #[derive(Default)]
    pub struct Blocks {
        items: [U128; 4],
        len: usize,
    }

    impl Blocks {
        pub fn push(&mut self, block: U128) {
            self.items[self.len] = block;
            self.len += 1;
        }

        pub fn as_slice(&self) -> &[U128] {
            &self.items[..self.len]
        }
    }
}

/// # Safety
/// Caller must have verified `aes` and `sse2` are available.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
pub unsafe fn oneshot_short(text: &[u8], seed: u64) -> u64 {
    let mut state = AesNiMinimalState::new(seed);
    if !text.is_empty() {
        for block in load_minimal_blocks(text).as_slice() {
            state.update(_mm_loadu_si128(block.b.as_ptr().cast()));
        }
    }
    state.finalize(text.len() as u64)
}
