//! Page-load state reported by the embedded browser.
//!
//! Load errors (network/HTTP) live here. Policy blocks never do.

use crate::config::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Error reported by the embedded browser while loading a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub code: i64,
    pub description: String,
    pub domain: Option<String>,
}

impl LoadError {
    pub fn new(code: i64, description: impl Into<String>) -> Self {
        Self { code, description: description.into(), domain: None }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// HTTP status error.
    pub fn http(status: u16) -> Self {
        Self::new(i64::from(status), format!("HTTP Error: {status}"))
    }
}

/// Which user-facing message a load error maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    NoInternet,
    Ssl,
    Load,
}

// Platform codes for "not connected" and "timed out".
const NOT_CONNECTED: i64 = -1009;
const TIMED_OUT: i64 = -1001;

impl LoadErrorKind {
    pub fn classify(err: &LoadError) -> Self {
        if err.code == NOT_CONNECTED || err.code == TIMED_OUT {
            return LoadErrorKind::NoInternet;
        }
        if err.description.to_ascii_lowercase().contains("ssl") {
            return LoadErrorKind::Ssl;
        }
        LoadErrorKind::Load
    }
}

impl Messages {
    pub fn for_kind(&self, kind: LoadErrorKind) -> &str {
        match kind {
            LoadErrorKind::NoInternet => &self.no_internet,
            LoadErrorKind::Ssl => &self.ssl_error,
            LoadErrorKind::Load => &self.load_error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    state: LoadState,
    progress: f64,
    error: Option<LoadError>,
}

impl PageState {
    pub fn state(&self) -> LoadState {
        self.state
    }
    pub fn progress(&self) -> f64 {
        self.progress
    }
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn load_start(&mut self) {
        self.state = LoadState::Loading;
        self.error = None;
        self.progress = 0.0;
    }

    pub fn load_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    pub fn load_end(&mut self) {
        self.state = LoadState::Success;
        self.progress = 1.0;
    }

    pub fn load_error(&mut self, err: LoadError) {
        self.state = LoadState::Error;
        self.error = Some(err);
        self.progress = 0.0;
    }

    /// Retry: clear the error and go back to idle.
    pub fn reset_error(&mut self) {
        self.error = None;
        self.state = LoadState::Idle;
    }
}
