//! NEON (aarch64 crypto extension) backend.
//!
//! ARMv8 crypto instructions don't expose AES-NI's single combined
//! `aesenc` op; `vaeseq_u8` performs AddRoundKey(0)+SubBytes+ShiftRows and
//! `vaesmcq_u8` performs MixColumns, so the x86 semantics are recovered as
//! `vaesmcq_u8(vaeseq_u8(state, zero)) ^ round_key` — the composition
//! credited in the reference material this crate's algorithm is grounded
//! on ("Emulating x86 AES Intrinsics on ARMv8-A").

#![allow(unsafe_code)]

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::kernels::constants::{PI, SHUFFLE, WIDE_BLOCK_SIZE};
use crate::kernels::portable::utils::{shift_right_bytes, U128};

#[cfg(target_arch = "aarch64")]
use core::arch::aarch64::{
    uint8x16_t, vaeseq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8,
};

#[inline]
unsafe fn to_vec(v: U128) -> uint8x16_t {
    vld1q_u8(v.b.as_ptr())
}

#[inline]
unsafe fn from_vec(v: uint8x16_t) -> U128 {
    let mut b = [0u8; 16];
    vst1q_u8(b.as_mut_ptr(), v);
    U128 { b }
}

/// # Safety
/// Caller must have verified the `aes` crypto extension is available.
#[target_feature(enable = "aes")]
unsafe fn aesenc(state: U128, key: U128) -> U128 {
    let s = to_vec(state);
    let k = to_vec(key);
    let zero = vdupq_n_u8(0);
    let mixed = vaesmcq_u8(vaeseq_u8(s, zero));
    from_vec(veorq_u8(mixed, k))
}

/// One-shot hash entry point for the NEON backend.
///
/// # Safety
/// Caller must have verified the `aes` crypto extension is available.
#[target_feature(enable = "aes")]
pub unsafe fn oneshot(text: &[u8], seed: u64) -> u64 {
    if text.len() <= 64 {
        oneshot_short(text, seed)
    } else {
        oneshot_wide(text, seed)
    }
}

unsafe fn load_minimal_blocks(data: &[u8]) -> Vec<U128> {
    let len = data.len();
    if len <= 16 {
        return vec![U128::from_bytes(data)];
    }
    let full_blocks = (len - 1) / 16;
    let mut out = Vec::with_capacity(full_blocks + 1);
    for i in 0..full_blocks {
        out.push(U128::from_bytes(&data[i * 16..i * 16 + 16]));
    }
    let nominal = (full_blocks + 1) * 16;
    let tail_block = U128::from_bytes(&data[len - 16..len]);
    out.push(shift_right_bytes(tail_block, (nominal - len) as u32));
    out
}

#[target_feature(enable = "aes")]
unsafe fn oneshot_short(text: &[u8], seed: u64) -> u64 {
    let key = U128::from_u64s(seed, seed);
    let mut aes = U128::from_u64s(seed ^ PI.0[0], seed ^ PI.0[1]);
    let mut sum = U128::from_u64s(seed ^ PI.0[8], seed ^ PI.0[9]);
    if !text.is_empty() {
        for block in load_minimal_blocks(text) {
            aes = aesenc(aes, block);
            sum = sum.shuffle(&SHUFFLE).add_epi64(&block);
        }
    }
    let key_with_length = key.add_epi64(&U128::from_u64s(text.len() as u64, 0));
    let mixed_registers = aesenc(sum, aes);
    aesenc(aesenc(mixed_registers, key_with_length), mixed_registers).lo()
}

#[target_feature(enable = "aes")]
unsafe fn oneshot_wide(text: &[u8], seed: u64) -> u64 {
    let key = U128::from_u64s(seed, seed);
    let mut aes = [U128::zero(); 4];
    let mut sum = [U128::zero(); 4];
    for lane in 0..4 {
        aes[lane] = U128::from_u64s(seed ^ PI.0[lane * 2], seed ^ PI.0[lane * 2 + 1]);
        sum[lane] = U128::from_u64s(seed ^ PI.0[8 + lane * 2], seed ^ PI.0[8 + lane * 2 + 1]);
    }
    let mut rest = text;
    while rest.len() >= WIDE_BLOCK_SIZE {
        let (block, tail) = rest.split_at(WIDE_BLOCK_SIZE);
        for lane in 0..4 {
            let b = U128::from_bytes(&block[lane * 16..lane * 16 + 16]);
            aes[lane] = aesenc(aes[lane], b);
            sum[lane] = sum[lane].shuffle(&SHUFFLE).add_epi64(&b);
        }
        rest = tail;
    }
    if !rest.is_empty() {
        let mut buf = [0u8; WIDE_BLOCK_SIZE];
        buf[..rest.len()].copy_from_slice(rest);
        for lane in 0..4 {
            let b = U128::from_bytes(&buf[lane * 16..lane * 16 + 16]);
            aes[lane] = aesenc(aes[lane], b);
            sum[lane] = sum[lane].shuffle(&SHUFFLE).add_epi64(&b);
        }
    }
    let key_with_length = key.add_epi64(&U128::from_u64s(text.len() as u64, 0));
    let m01 = aesenc(aesenc(sum[0], aes[0]), aesenc(sum[1], aes[1]));
    let m23 = aesenc(aesenc(sum[2], aes[2]), aesenc(sum[3], aes[3]));
    let m = aesenc(m01, m23);
    aesenc(aesenc(m, key_with_length), m).lo()
}
