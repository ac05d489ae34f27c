//! navguard: evaluate candidate URLs against a shell config.
//!
//! Usage: `navguard [CONFIG] [URL...]`
//! - CONFIG defaults to `navguard.yaml`
//! - with no URLs, reads one URL per line from stdin
//! - prints `<decision>\t<url>` per URL; hand-offs go to a dry-run handler

use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use navguard_shell::delegate::{HandlerError, UrlHandler};
use navguard_shell::host::NavigationHost;
use navguard_shell::{app_state, config, logging};

/// Logs instead of launching anything.
struct DryRunHandler;

#[async_trait]
impl UrlHandler for DryRunHandler {
    async fn can_open(&self, _url: &str) -> bool {
        true
    }

    async fn open(&self, url: &str) -> Result<(), HandlerError> {
        tracing::info!(url = %url, "dry-run: would open with platform handler");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "navguard.yaml".to_string());
    let mut urls: Vec<String> = args.collect();

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}: {e}", e.code().as_str());
            return ExitCode::FAILURE;
        }
    };

    let state = match app_state::AppState::new(cfg, Arc::new(DryRunHandler)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}: {e}", e.code().as_str());
            return ExitCode::FAILURE;
        }
    };
    let host = NavigationHost::new(state);
    tracing::info!(config = %path, base_url = %host.initial_url(), "navguard ready");

    if urls.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => urls.push(line),
                Ok(None) => break,
                Err(e) => {
                    eprintln!("IO: read stdin failed: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let mut handoffs = Vec::new();
    for url in &urls {
        let nav = host.navigate(url);
        println!("{}\t{}", nav.decision, url);
        handoffs.extend(nav.handoff);
    }

    // Let dry-run hand-offs log before the runtime shuts down.
    for h in handoffs {
        let _ = h.await;
    }

    tracing::debug!(metrics = %host.app().metrics().render(), "decision metrics");
    ExitCode::SUCCESS
}
