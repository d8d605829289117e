//! AES-NI public entry point: routes to the short or wide path by length,
//! exactly like the portable reference's `hash`.

#![allow(unsafe_code)]

use super::compress::oneshot_wide;
use super::short::oneshot_short;

/// # Safety
/// Caller must have verified `aes` and `sse2` are available (the dispatcher
/// checks `is_x86_feature_detected!("aes")` and `"sse2"` before calling this).
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
pub unsafe fn oneshot(text: &[u8], seed: u64) -> u64 {
    if text.len() <= 64 {
        oneshot_short(text, seed)
    } else {
        oneshot_wide(text, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::portable;

    #[test]
    fn matches_portable_reference() {
        if !is_x86_feature_detected!("aes") || !is_x86_feature_detected!("sse2") {
            return;
        }
        let lengths = [0usize, 1, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65, 127, 513];
        for &len in &lengths {
            let data: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
            for seed in [0u64, 1, 0xDEAD_BEEF] {
                let expected = portable::hash(&data, seed);
                // SAFETY: feature support checked above.
                let actual = unsafe { oneshot(&data, seed) };
                assert_eq!(actual, expected, "len={len} seed={seed}");
            }
        }
    }
}
