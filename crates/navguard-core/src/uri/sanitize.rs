//! Blocklist gate run before any allow-list check.
//!
//! Sanitization here is rejection, not normalization: an accepted URL comes
//! back trimmed and otherwise unchanged.

use thiserror::Error;

/// Schemes that can execute script or read local/embedded content.
pub const DANGEROUS_SCHEMES: [&str; 4] = ["javascript", "data", "file", "vbscript"];

/// Why the sanitizer rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SanitizeRejection {
    #[error("empty url")]
    Empty,
    #[error("dangerous scheme: {0}")]
    DangerousScheme(&'static str),
}

/// Trim the candidate and reject it if empty or if it starts with a
/// dangerous scheme (any letter case).
pub fn sanitize(raw: &str) -> Result<&str, SanitizeRejection> {
    let url = raw.trim();
    if url.is_empty() {
        tracing::warn!("blocked empty url");
        return Err(SanitizeRejection::Empty);
    }

    if let Some(scheme) = dangerous_scheme(url) {
        tracing::warn!(url = %url, scheme, "blocked dangerous url");
        return Err(SanitizeRejection::DangerousScheme(scheme));
    }

    Ok(url)
}

/// Returns the deny-listed scheme `url` begins with, if any.
///
/// URL parsers drop leading C0 controls and spaces and strip tab/CR/LF
/// anywhere, so `"java\tscript:"` parses as `javascript:`. The prefix check
/// runs on that same view.
pub fn dangerous_scheme(url: &str) -> Option<&'static str> {
    let head: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    DANGEROUS_SCHEMES
        .iter()
        .copied()
        .find(|scheme| head.strip_prefix(scheme).is_some_and(|rest| rest.starts_with(':')))
}
