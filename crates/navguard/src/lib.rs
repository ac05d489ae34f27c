//! Top-level facade crate for navguard.
//!
//! Re-exports core types and the shell library so hosts can depend on a single crate.

pub mod core {
    pub use navguard_core::*;
}

pub mod shell {
    pub use navguard_shell::*;
}
