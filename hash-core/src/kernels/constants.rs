//! Shared constants for every backend.
//!
//! The hash schedule leans on two pieces of "nothing up my sleeve" material:
//! the fractional hex digits of π (via the Bailey-Borwein-Plouffe expansion)
//! and a fixed byte permutation used to decorrelate the additive accumulator
//! between absorb steps. Both are process-wide, read-only, and laid out with
//! an alignment that satisfies every backend's load requirements.

/// Number of 64-bit words of π material.
pub const PI_WORD_COUNT: usize = 16;

/// GF(2^8) reduction polynomial used by `MixColumns` (x^8 + x^4 + x^3 + x + 1, low byte).
pub const GF_POLY: u8 = 0x1b;

/// Size in bytes of one wide-state absorb block (4 lanes x 16 bytes).
pub const WIDE_BLOCK_SIZE: usize = 64;

/// Size in bytes of one minimal-state absorb block.
pub const MINIMAL_BLOCK_SIZE: usize = 16;

/// Threshold above which `bytesum` switches from the per-register path to the
/// bidirectional non-temporal-load path. Tunable; must not change the output.
pub const BYTESUM_HUGE_THRESHOLD: usize = 1024 * 1024;

/// The 1024 bits of π's fractional hex expansion, as 16 little-endian u64 words.
///
/// 64-byte aligned so AVX-512 backends can issue aligned loads directly
/// against this table.
#[repr(align(64))]
pub struct PiConstants(pub [u64; PI_WORD_COUNT]);

pub static PI: PiConstants = PiConstants([
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
    0x4528_21E6_38D0_1377,
    0xBE54_66CF_34E9_0C6C,
    0xC0AC_29B7_C97C_50DD,
    0x3F84_D5B5_B547_0917,
    0x9216_D5D9_8979_FB1B,
    0xD131_0BA6_98DF_B5AC,
    0x2FFD_72DB_D01A_DFB7,
    0xB8E1_AFED_6A26_7E96,
    0xBA7C_9045_F12C_7F99,
    0x24A1_9947_B391_6CF7,
    0x0801_F2E2_858E_FC16,
    0x6369_20D8_7157_4E69,
]);

/// Additive-shuffle permutation `P`, applied to the 16 bytes of the `sum`
/// accumulator on every absorb step.
pub const SHUFFLE: [u8; 16] = [
    4, 11, 9, 6, 8, 13, 15, 5, 14, 3, 1, 12, 0, 7, 10, 2,
];

/// `SHUFFLE` replicated across four 16-byte lanes, for SIMD backends that
/// shuffle an entire 64-byte register in one instruction.
pub const SHUFFLE_X4: [u8; 64] = {
    let mut out = [0u8; 64];
    let mut lane = 0;
    while lane < 4 {
        let mut i = 0;
        while i < 16 {
            out[lane * 16 + i] = SHUFFLE[i];
            i += 1;
        }
        lane += 1;
    }
    out
};
