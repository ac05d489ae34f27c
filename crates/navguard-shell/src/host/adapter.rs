use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use tokio::task::JoinHandle;

use navguard_core::NavigationDecision;

use crate::app_state::AppState;

use super::page::{LoadError, LoadErrorKind, PageState};

/// One evaluated navigation attempt.
pub struct Navigation {
    pub decision: NavigationDecision,
    /// Spawned platform hand-off, for `DelegateExternal` when a runtime exists.
    pub handoff: Option<JoinHandle<bool>>,
}

/// Thin adapter between the embedded-browser callbacks and the policy.
///
/// Navigation decisions are synchronous and stateless; the only state held
/// here is the page-load lifecycle, which policy decisions never touch.
pub struct NavigationHost {
    app: AppState,
    page: Mutex<PageState>,
}

impl NavigationHost {
    pub fn new(app: AppState) -> Self {
        Self { app, page: Mutex::new(PageState::default()) }
    }

    pub fn app(&self) -> &AppState {
        &self.app
    }

    /// First URL loaded into the surface.
    pub fn initial_url(&self) -> &str {
        &self.app.cfg().app.base_url
    }

    /// Navigation intercept. `true` lets the surface proceed.
    pub fn on_before_navigate(&self, candidate_url: &str) -> bool {
        // Hand-off is fire-and-forget: the join handle is dropped.
        self.navigate(candidate_url).decision.allows_inline()
    }

    /// Evaluate a candidate URL and start the hand-off if delegated.
    pub fn navigate(&self, candidate_url: &str) -> Navigation {
        let metrics = self.app.metrics();
        let started = Instant::now();
        let decision = self.app.policy().decide(candidate_url);
        metrics.decision_duration.observe(&[], started.elapsed());

        let reason = match &decision {
            NavigationDecision::Block(r) => r.label(),
            _ => "",
        };
        metrics.decisions.inc(&[("outcome", decision.label()), ("reason", reason)]);

        let handoff = match &decision {
            NavigationDecision::DelegateExternal(url) => self.spawn_handoff(url.clone()),
            _ => None,
        };

        Navigation { decision, handoff }
    }

    fn spawn_handoff(&self, url: String) -> Option<JoinHandle<bool>> {
        let Ok(rt) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(url = %url, "no async runtime; skipping platform hand-off");
            return None;
        };

        let delegate = self.app.delegate().clone();
        let metrics = self.app.metrics();
        metrics.delegations_in_flight.inc(&[]);

        Some(rt.spawn(async move {
            let opened = delegate.delegate(&url).await;
            metrics.delegations_in_flight.dec(&[]);
            opened
        }))
    }

    // --------------------
    // Page-load callbacks
    // --------------------

    // Poisoned lock means a panic mid-update; the state is plain data, so
    // keep using it rather than bringing the host down.
    fn page_mut(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn page(&self) -> PageState {
        self.page_mut().clone()
    }

    pub fn on_load_start(&self) {
        self.page_mut().load_start();
    }

    pub fn on_load_progress(&self, progress: f64) {
        self.page_mut().load_progress(progress);
    }

    pub fn on_load_end(&self) {
        self.page_mut().load_end();
    }

    pub fn on_load_error(&self, err: LoadError) {
        tracing::warn!(code = err.code, description = %err.description, "page load failed");
        self.page_mut().load_error(err);
    }

    pub fn on_http_error(&self, status: u16) {
        self.on_load_error(LoadError::http(status));
    }

    /// Retry after an error screen. The host reloads the surface afterwards.
    pub fn retry(&self) {
        self.page_mut().reset_error();
    }

    /// Message for the current load error, if any.
    pub fn error_message(&self) -> Option<String> {
        let page = self.page_mut();
        let err = page.error()?;
        let kind = LoadErrorKind::classify(err);
        Some(self.app.cfg().messages.for_kind(kind).to_string())
    }

    /// Text shown when a navigation was blocked (not an error screen).
    pub fn blocked_message(&self) -> &str {
        &self.app.cfg().messages.blocked_navigation
    }
}
