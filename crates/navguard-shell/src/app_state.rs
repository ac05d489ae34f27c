//! Shared application state for the navguard shell.
//!
//! Compiles the policy once, wires the external delegate to the platform
//! handler, and owns the metrics registry. Startup errors are returned, not
//! panicked.

use std::sync::Arc;

use navguard_core::error::{NavGuardError, Result};
use navguard_core::NavigationDecision;

use crate::config::ShellConfig;
use crate::delegate::{ExternalDelegate, UrlHandler};
use crate::obs::ShellMetrics;
use crate::policy::PolicyConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ShellConfig,
    policy: Arc<PolicyConfig>,
    delegate: ExternalDelegate,
    metrics: Arc<ShellMetrics>,
}

impl AppState {
    pub fn new(cfg: ShellConfig, handler: Arc<dyn UrlHandler>) -> Result<Self> {
        let policy = PolicyConfig::new(cfg.app.base_url.clone(), &cfg.policy).map_err(|e| {
            NavGuardError::BadConfig(format!("policy compile failed (app={}): {e}", cfg.app.name))
        })?;
        let policy = Arc::new(policy);

        // base_url <-> allow-list sanity check
        if policy.decide(policy.base_url()) != NavigationDecision::RenderInline {
            tracing::warn!(
                base_url = %policy.base_url(),
                "app.base_url would not render inline under policy.allowed_domains"
            );
        }

        let metrics = Arc::new(ShellMetrics::default());
        let delegate = ExternalDelegate::new(Arc::clone(&policy), handler, Arc::clone(&metrics));

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, policy, delegate, metrics }),
        })
    }

    pub fn cfg(&self) -> &ShellConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> Arc<PolicyConfig> {
        Arc::clone(&self.inner.policy)
    }

    pub fn delegate(&self) -> &ExternalDelegate {
        &self.inner.delegate
    }

    pub fn metrics(&self) -> Arc<ShellMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
