//! navguard shell library entry.
//!
//! This crate wires config, the compiled navigation policy, the external
//! delegate, page-load state, and decision metrics into the adapter an
//! embedded-browser host calls from its navigation intercept. It is consumed
//! by the `navguard` binary and by integration tests.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod app_state;
pub mod config;
pub mod delegate;
pub mod host;
pub mod logging;
pub mod obs;
pub mod policy;
