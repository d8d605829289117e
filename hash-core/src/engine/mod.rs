//! Execution engine: runtime CPU-feature dispatch.

pub mod dispatcher;

pub use dispatcher::active_backend;
