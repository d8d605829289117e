//! One-shot public API: `bytesum`, `hash`, and `generate`.

use crate::engine::dispatcher;
use crate::kernels::portable;

/// Sum of all bytes in `bytes`, as an unsigned 64-bit accumulator.
///
/// Total: defined for every input, including the empty slice (`0`).
#[must_use]
pub fn bytesum(bytes: &[u8]) -> u64 {
    dispatcher::bytesum(bytes)
}

/// Hash `bytes` under `seed`, returning a 64-bit digest.
///
/// Deterministic: equal `(bytes, seed)` pairs always produce the same
/// digest, on every backend this crate selects at runtime, and the digest
/// equals what streaming the same bytes through [`crate::HashState`] and
/// calling [`HashState::digest`](crate::HashState::digest) would produce.
#[must_use]
pub fn hash(bytes: &[u8], seed: u64) -> u64 {
    dispatcher::hash(bytes, seed)
}

/// Fill `out` with deterministic pseudo-random bytes derived from `nonce`.
///
/// Not cryptographically secure. Identical `(out.len(), nonce)` pairs always
/// produce identical output.
pub fn generate(out: &mut [u8], nonce: u64) {
    portable::generate(out, nonce);
}
