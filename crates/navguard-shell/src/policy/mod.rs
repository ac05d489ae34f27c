//! Policy layer (allowlists, safety classifier, navigation router).
//!
//! Compiles the configured allow-lists into an immutable `PolicyConfig` that
//! the host adapter consults synchronously on every navigation attempt.

pub mod allowlist;
pub mod engine;

pub use allowlist::DomainRule;
pub use engine::{decide, PolicyConfig};
