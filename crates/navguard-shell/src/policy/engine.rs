use std::collections::HashSet;

use navguard_core::error::Result;
use navguard_core::uri::{
    dangerous_scheme, extract_domain, host_of, is_insecure_url, is_secure_transport, sanitize, scheme_of,
};
use navguard_core::{BlockReason, NavigationDecision};

use crate::config::schema::PolicySection;

use super::allowlist::{compile_domain_rules, compile_schemes, is_domain_allowed, is_scheme_allowed, DomainRule};

/// Compiled, immutable navigation policy.
/// Construct once at startup, then share via Arc.
///
/// Every check is a pure function of `(self, url)`: no I/O, no interior
/// mutability, so concurrent navigations evaluate independently.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    base_url: String,
    allowed_domains: Vec<DomainRule>,
    allowed_schemes: HashSet<String>,
}

impl PolicyConfig {
    pub fn new(base_url: impl Into<String>, section: &PolicySection) -> Result<Self> {
        section.validate()?;
        Ok(Self {
            base_url: base_url.into(),
            allowed_domains: compile_domain_rules(&section.allowed_domains)?,
            allowed_schemes: compile_schemes(&section.allowed_schemes)?,
        })
    }

    /// Convenience constructor from plain lists (tests, embedding hosts).
    pub fn from_lists(base_url: &str, domains: &[&str], schemes: &[&str]) -> Result<Self> {
        let section = PolicySection {
            allowed_domains: domains.iter().map(|s| s.to_string()).collect(),
            allowed_schemes: schemes.iter().map(|s| s.to_string()).collect(),
        };
        Self::new(base_url, &section)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    pub fn allowed_domains(&self) -> &[DomainRule] {
        &self.allowed_domains
    }
    pub fn allowed_schemes(&self) -> &HashSet<String> {
        &self.allowed_schemes
    }

    /// Scheme matcher: parsed scheme is in the allow-set. Unparseable → false.
    pub fn is_allowed_scheme(&self, url: &str) -> bool {
        scheme_of(url).is_some_and(|s| is_scheme_allowed(&self.allowed_schemes, &s))
    }

    /// Domain matcher: lower-cased hostname matches a rule. Unparseable or
    /// hostless → false.
    pub fn is_allowed_domain(&self, url: &str) -> bool {
        host_of(url).is_some_and(|h| is_domain_allowed(&self.allowed_domains, &h))
    }

    /// Safety classifier: may this URL be acted upon at all.
    ///
    /// Repeats the dangerous-scheme gate independently of the sanitizer.
    /// URLs that carry no host (`tel:`, `mailto:`, `sms:`) have no domain to
    /// check and pass on scheme alone; any URL with a host must also pass the
    /// domain matcher.
    pub fn is_safe_url(&self, url: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        if dangerous_scheme(url).is_some() {
            return false;
        }
        if !self.is_allowed_scheme(url) {
            return false;
        }
        match host_of(url) {
            Some(host) => is_domain_allowed(&self.allowed_domains, &host),
            None => true,
        }
    }

    /// Navigation router. Check order is fixed:
    /// sanitize → secure scheme + domain (inline) → safety (delegate) → block.
    pub fn decide(&self, raw_url: &str) -> NavigationDecision {
        let Ok(sanitized) = sanitize(raw_url) else {
            return NavigationDecision::Block(BlockReason::InvalidOrDangerous);
        };

        if is_secure_transport(sanitized) && self.is_allowed_domain(sanitized) {
            tracing::debug!(url = %sanitized, "render inline");
            return NavigationDecision::RenderInline;
        }

        if self.is_safe_url(sanitized) {
            tracing::debug!(url = %sanitized, "delegate to platform handler");
            return NavigationDecision::DelegateExternal(sanitized.to_string());
        }

        let domain = extract_domain(sanitized).unwrap_or_default();
        if is_insecure_url(sanitized) {
            tracing::warn!(url = %sanitized, %domain, "blocked insecure http navigation");
        } else {
            tracing::warn!(url = %sanitized, %domain, reason = BlockReason::NotPermitted.as_str(), "blocked navigation");
        }
        NavigationDecision::Block(BlockReason::NotPermitted)
    }
}

/// Free-function form of [`PolicyConfig::decide`].
pub fn decide(policy: &PolicyConfig, raw_url: &str) -> NavigationDecision {
    policy.decide(raw_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PolicyConfig {
        PolicyConfig::from_lists(
            "https://example.com",
            &["example.com", "*.example.com"],
            &["https", "mailto", "tel", "sms"],
        )
        .unwrap()
    }

    #[test]
    fn scheme_matcher_fails_closed() {
        let p = policy();
        assert!(p.is_allowed_scheme("https://anything.net"));
        assert!(p.is_allowed_scheme("tel:+1"));
        assert!(!p.is_allowed_scheme("http://example.com"));
        assert!(!p.is_allowed_scheme("%%%"));
    }

    #[test]
    fn domain_matcher_lowercases_host() {
        let p = policy();
        assert!(p.is_allowed_domain("https://WWW.Example.Com/x"));
        assert!(!p.is_allowed_domain("https://evilexample.com"));
        assert!(!p.is_allowed_domain("tel:+1"));
        assert!(!p.is_allowed_domain("::"));
    }

    #[test]
    fn classifier_handles_hostless_links() {
        let p = policy();
        assert!(p.is_safe_url("mailto:hi@example.com"));
        assert!(p.is_safe_url("sms:+15551234567"));
        assert!(!p.is_safe_url("sms://evil.com/+1"));
        assert!(!p.is_safe_url(""));
        assert!(!p.is_safe_url("https://evil.com"));
    }

    #[test]
    fn classifier_deny_list_beats_allow_list() {
        let p = PolicyConfig::from_lists(
            "https://example.com",
            &["example.com"],
            &["https", "javascript", "data", "file", "vbscript"],
        )
        .unwrap();
        assert!(!p.is_safe_url("javascript:alert(1)"));
        assert!(!p.is_safe_url("DATA:text/plain,hi"));
        assert!(!p.is_safe_url("file://example.com/etc/passwd"));
        assert!(!p.is_safe_url("VBScript:x"));
    }

    #[test]
    fn insecure_same_domain_is_never_inline() {
        let p = PolicyConfig::from_lists("https://example.com", &["example.com"], &["https", "http"])
            .unwrap();
        assert_eq!(
            p.decide("http://example.com"),
            NavigationDecision::DelegateExternal("http://example.com".into())
        );
    }

    #[test]
    fn decide_uses_sanitized_url() {
        let p = policy();
        assert_eq!(
            p.decide("  tel:+15551234567 "),
            NavigationDecision::DelegateExternal("tel:+15551234567".into())
        );
    }
}
