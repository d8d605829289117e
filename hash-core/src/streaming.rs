//! Incremental (streaming) hash state.
//!
//! Always runs on the portable wide-state schedule: the streaming caller
//! amortizes state-management overhead across many `update` calls already,
//! so the backend-dispatch win that matters for `hash`/`bytesum` (avoiding
//! per-call CPUID probing on tiny one-shot inputs) doesn't apply here, and
//! keeping one code path keeps the fold-to-minimal boundary (see
//! `hash_state_equal`) easy to reason about.

use crate::kernels::portable::WideState;

/// Opaque incremental hash state. See [`crate::hash`] for the one-shot
/// equivalent; streaming the same bytes through this type and calling
/// [`HashState::digest`] always produces the same value.
#[derive(Clone, Copy)]
pub struct HashState {
    inner: WideState,
}

impl HashState {
    /// Start a new hash state seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: WideState::new(seed),
        }
    }

    /// Absorb `bytes` into the state. May be called any number of times with
    /// chunks of any length, including zero.
    pub fn update(&mut self, bytes: &[u8]) {
        self.inner.stream(bytes);
    }

    /// Compute the current digest without mutating the state. Idempotent:
    /// calling this repeatedly, or interleaved with further `update` calls,
    /// always reflects exactly the bytes absorbed so far.
    #[must_use]
    pub fn digest(&self) -> u64 {
        self.inner.finalize()
    }

    /// Reset to a freshly-seeded state, as if newly constructed with `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.inner = WideState::new(seed);
    }

    /// Compare two states' absorbed content, ignoring any bytes buffered but
    /// not yet forming a complete 64-byte block.
    ///
    /// Two states that absorbed the same whole number of 64-byte blocks
    /// under the same seed compare equal regardless of differing pending
    /// tail bytes; `ins`/`ins_length` are intentionally excluded from the
    /// comparison.
    #[must_use]
    pub fn equal(a: &HashState, b: &HashState) -> bool {
        a.inner.aes == b.inner.aes && a.inner.sum == b.inner.sum && a.inner.key == b.inner.key
    }
}
