//! Shell config loader (strict parsing).

pub mod schema;

use std::fs;

use navguard_core::error::{NavGuardError, Result};

pub use schema::{AppSection, Messages, MixedContentMode, PolicySection, ShellConfig, WebViewSettings};

pub fn load_from_file(path: &str) -> Result<ShellConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NavGuardError::Io(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ShellConfig> {
    let cfg: ShellConfig = serde_yaml::from_str(s)
        .map_err(|e| NavGuardError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
