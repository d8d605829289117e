//! AVX-512 + VAES backend: true 512-bit wide lanes for the hash state, plus
//! a SAD-based `bytesum`.

mod compress;
mod finalize;
mod state;

pub use compress::bytesum;
pub use finalize::oneshot;
pub use state::Avx512WideState;
