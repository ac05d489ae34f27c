//! Logging init. The `tracing` facade is the diagnostics sink for blocked
//! and rejected URLs.

use navguard_core::error::{NavGuardError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| NavGuardError::Internal(format!("logging init failed: {e}")))
}
