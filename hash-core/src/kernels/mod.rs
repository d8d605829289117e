//! Backend kernels.
//!
//! Every backend implements the same mixing schedule as `portable` at a
//! different SIMD width; the dispatcher in `engine::dispatcher` selects
//! among them at runtime.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod aesni;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx512;
pub mod constants;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod portable;
