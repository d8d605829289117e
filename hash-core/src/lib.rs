#![cfg_attr(not(feature = "std"), no_std)]

//! A non-cryptographic, hardware-accelerated hashing and random-bytes
//! subsystem.
//!
//! Four primitives: a 64-bit byte checksum ([`bytesum`]), a seeded 64-bit
//! one-shot hash ([`hash`]), an incremental variant producing an identical
//! digest ([`HashState`]), and a deterministic PRNG ([`generate`]). The
//! mixing schedule reuses a single AES round across absorb, finalize, and
//! generation; see the module-level docs under [`kernels`] for the
//! per-backend implementations and [`engine::dispatcher`] for how one is
//! selected at runtime.
//!
//! ```
//! let digest = voltahash::hash(b"hello, world", 0);
//!
//! let mut state = voltahash::HashState::new(0);
//! state.update(b"hello, ");
//! state.update(b"world");
//! assert_eq!(state.digest(), digest);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Kept public-but-hidden so the verification/benchmark crates, and the
// cross-backend consistency tests, can reach every backend directly.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

pub use oneshot::{bytesum, generate, hash};
pub use streaming::HashState;
pub use types::CpuFeatureError;

/// Name of the backend this process selected at runtime (e.g.
/// `"avx512+vaes"`, `"aes-ni"`, `"portable"`).
#[must_use]
pub fn active_backend() -> &'static str {
    engine::active_backend()
}
