//! Shared error type across navguard crates.
//!
//! Only setup paths (config load, rule compilation, logging init) are fallible.
//! The navigation decision path never returns this type; it fails closed to
//! `Block` or `false` instead.

use thiserror::Error;

/// Stable error codes (used by the binary's exit message and by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config could not be decoded or failed validation.
    BadConfig,
    /// Config `version` is not supported.
    UnsupportedVersion,
    /// A domain or scheme rule could not be compiled.
    InvalidRule,
    /// Filesystem failure.
    Io,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::InvalidRule => "INVALID_RULE",
            ErrorCode::Io => "IO",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NavGuardError>;

/// Unified error type used by core and shell.
#[derive(Debug, Error)]
pub enum NavGuardError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid rule: {0}")]
    InvalidRule(String),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NavGuardError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NavGuardError::BadConfig(_) => ErrorCode::BadConfig,
            NavGuardError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            NavGuardError::InvalidRule(_) => ErrorCode::InvalidRule,
            NavGuardError::Io(_) => ErrorCode::Io,
            NavGuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
