//! navguard core: runtime-free navigation primitives and error types.
//!
//! This crate defines the decision type handed to embedded-browser hosts, the
//! URL sanitizer that gates every candidate URL, and the error surface shared
//! with the shell crate. It carries no runtime dependencies so the same
//! primitives can back any host integration.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Hostile or malformed URLs must degrade to a rejection, never a crash.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod decision;
pub mod error;
pub mod uri;

pub use decision::{BlockReason, NavigationDecision};
/// Shared result type.
pub use error::{NavGuardError, Result};
