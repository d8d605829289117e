//! Runtime CPU-feature dispatch.
//!
//! Every backend kernel is checked for bit-identical agreement with the
//! portable reference by the cross-backend consistency tests; the
//! dispatcher's only job is picking the fastest one the host CPU actually
//! supports. Selection happens once per process and is cached, since
//! re-probing CPUID on every call would dominate the cost of the ≤16-byte
//! fast path.

#![allow(unsafe_code)]

use crate::kernels::portable;

#[cfg(feature = "std")]
use std::sync::OnceLock;

#[cfg(feature = "std")]
static BACKEND_NAME: OnceLock<&'static str> = OnceLock::new();

/// Name of the backend this process selected (e.g. `"avx512+vaes"`,
/// `"aes-ni"`, `"portable"`). Stable for the lifetime of the process.
#[cfg(feature = "std")]
pub fn active_backend() -> &'static str {
    *BACKEND_NAME.get_or_init(detect_backend_name)
}

#[cfg(not(feature = "std"))]
pub fn active_backend() -> &'static str {
    detect_backend_name()
}

fn detect_backend_name() -> &'static str {
    #[cfg(feature = "std")]
    {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("avx512f")
                && is_x86_feature_detected!("avx512bw")
                && is_x86_feature_detected!("vaes")
                && is_x86_feature_detected!("aes")
                && is_x86_feature_detected!("sse2")
            {
                return "avx512+vaes";
            }
            if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
                return "aes-ni";
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("aes") {
                return "neon+crypto";
            }
        }
    }
    #[cfg(not(feature = "std"))]
    {
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx512f",
            target_feature = "avx512bw",
            target_feature = "vaes"
        ))]
        return "avx512+vaes";
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "aes",
            target_feature = "sse2"
        ))]
        return "aes-ni";
        #[cfg(all(target_arch = "aarch64", target_feature = "aes"))]
        return "neon+crypto";
    }
    "portable"
}

/// Compute `hash(text, seed)` using the best backend available at runtime.
pub fn hash(text: &[u8], seed: u64) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "std")]
        {
            if is_x86_feature_detected!("avx512f")
                && is_x86_feature_detected!("avx512bw")
                && is_x86_feature_detected!("vaes")
                && is_x86_feature_detected!("aes")
                && is_x86_feature_detected!("sse2")
            {
                // SAFETY: all five features were just confirmed present via
                // `is_x86_feature_detected!` immediately above.
                return unsafe { crate::kernels::avx512::oneshot(text, seed) };
            }
            if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
                // SAFETY: `aes` and `sse2` confirmed present immediately above.
                return unsafe { crate::kernels::aesni::oneshot(text, seed) };
            }
        }
        #[cfg(not(feature = "std"))]
        {
            #[cfg(all(target_feature = "aes", target_feature = "sse2"))]
            // SAFETY: `target_feature` cfg gates guarantee these instructions
            // are legal to emit on this compilation target.
            return unsafe { crate::kernels::aesni::oneshot(text, seed) };
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        #[cfg(feature = "std")]
        {
            if std::arch::is_aarch64_feature_detected!("aes") {
                // SAFETY: the `aes` crypto extension was confirmed present
                // immediately above.
                return unsafe { crate::kernels::neon::oneshot(text, seed) };
            }
        }
        #[cfg(all(not(feature = "std"), target_feature = "aes"))]
        // SAFETY: `target_feature = "aes"` cfg gate guarantees this
        // instruction is legal to emit on this compilation target.
        return unsafe { crate::kernels::neon::oneshot(text, seed) };
    }
    portable::hash(text, seed)
}

/// Compute `bytesum(text)` using the best backend available at runtime.
pub fn bytesum(text: &[u8]) -> u64 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[cfg(feature = "std")]
    {
        if is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw") {
            // SAFETY: both features confirmed present immediately above.
            return unsafe { crate::kernels::avx512::bytesum(text) };
        }
        if is_x86_feature_detected!("avx2") {
            // SAFETY: `avx2` confirmed present immediately above.
            return unsafe { crate::kernels::avx2::bytesum(text) };
        }
    }
    portable::bytesum(text)
}
