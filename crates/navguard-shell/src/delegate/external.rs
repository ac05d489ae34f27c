use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::obs::ShellMetrics;
use crate::policy::PolicyConfig;

/// Failure reported by the platform while opening a URL.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("platform refused url: {0}")]
    Refused(String),
    #[error("platform handler failed: {0}")]
    Failed(String),
}

/// Platform URL-handler service (dialer, mail client, SMS app, ...).
#[async_trait]
pub trait UrlHandler: Send + Sync {
    /// Whether a registered handler exists for `url`.
    async fn can_open(&self, url: &str) -> bool;
    /// Launch the handler. Best-effort.
    async fn open(&self, url: &str) -> Result<(), HandlerError>;
}

/// Result of one hand-off attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateOutcome {
    Opened,
    NoHandler,
    SchemeRejected,
    Failed,
}

impl DelegateOutcome {
    pub fn label(self) -> &'static str {
        match self {
            DelegateOutcome::Opened => "opened",
            DelegateOutcome::NoHandler => "no_handler",
            DelegateOutcome::SchemeRejected => "scheme_rejected",
            DelegateOutcome::Failed => "failed",
        }
    }
}

/// Hands URLs classified `DelegateExternal` to the platform.
///
/// Never raises: every failure becomes `false` plus a log line.
#[derive(Clone)]
pub struct ExternalDelegate {
    policy: Arc<PolicyConfig>,
    handler: Arc<dyn UrlHandler>,
    metrics: Arc<ShellMetrics>,
}

impl ExternalDelegate {
    pub fn new(policy: Arc<PolicyConfig>, handler: Arc<dyn UrlHandler>, metrics: Arc<ShellMetrics>) -> Self {
        Self { policy, handler, metrics }
    }

    /// `true` only if a platform handler was found and launched.
    pub async fn delegate(&self, url: &str) -> bool {
        self.try_delegate(url).await == DelegateOutcome::Opened
    }

    pub async fn try_delegate(&self, url: &str) -> DelegateOutcome {
        let outcome = self.run(url).await;
        self.metrics.delegations.inc(&[("outcome", outcome.label())]);
        outcome
    }

    async fn run(&self, url: &str) -> DelegateOutcome {
        // The decision may be stale relative to this call; re-check the scheme.
        if !self.policy.is_allowed_scheme(url) {
            tracing::warn!(url = %url, "blocked url with disallowed scheme");
            return DelegateOutcome::SchemeRejected;
        }

        if !self.handler.can_open(url).await {
            tracing::debug!(url = %url, "no platform handler for url");
            return DelegateOutcome::NoHandler;
        }

        match self.handler.open(url).await {
            Ok(()) => {
                tracing::info!(url = %url, "opened url with platform handler");
                DelegateOutcome::Opened
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "error opening external url");
                DelegateOutcome::Failed
            }
        }
    }
}
