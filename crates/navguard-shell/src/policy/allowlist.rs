//! Allowlist compilation and matching utilities.
//!
//! Domains support exact hostnames and `*.base` wildcard rules. Schemes are
//! exact, case-sensitive names with no wildcard form.

use std::collections::HashSet;

use navguard_core::error::{NavGuardError, Result};

/// Compiled domain rule. Hostnames are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRule {
    Exact(String),
    /// `*.base`: matches `base` itself and any dot-separated subdomain of it.
    Wildcard(String),
}

impl DomainRule {
    pub fn parse(raw: &str) -> Result<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let (wildcard, host) = match lowered.strip_prefix("*.") {
            Some(base) => (true, base),
            None => (false, lowered.as_str()),
        };

        if host.is_empty() {
            return Err(NavGuardError::InvalidRule(format!(
                "invalid allowed_domains entry: {raw:?} (empty hostname)"
            )));
        }
        if host.contains('*') {
            return Err(NavGuardError::InvalidRule(format!(
                "invalid allowed_domains entry: {raw} (wildcard only allowed as leading \"*.\")"
            )));
        }
        if host.starts_with('.') || host.contains('/') || host.chars().any(char::is_whitespace) {
            return Err(NavGuardError::InvalidRule(format!(
                "invalid allowed_domains entry: {raw} (expected hostname or *.hostname)"
            )));
        }

        let host = host.to_string();
        Ok(if wildcard { DomainRule::Wildcard(host) } else { DomainRule::Exact(host) })
    }

    /// `host` must already be lower-cased.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            DomainRule::Exact(h) => host == h.as_str(),
            DomainRule::Wildcard(base) => {
                host == base.as_str()
                    || host
                        .strip_suffix(base.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        }
    }
}

pub fn compile_domain_rules(raw: &[String]) -> Result<Vec<DomainRule>> {
    raw.iter().map(|s| DomainRule::parse(s)).collect()
}

/// Strip one trailing `:` and check RFC 3986 scheme syntax. Upper-case
/// entries are rejected because matching is case-sensitive against the
/// parser's lower-cased scheme; they could never match.
pub fn compile_schemes(raw: &[String]) -> Result<HashSet<String>> {
    let mut out = HashSet::with_capacity(raw.len());
    for s in raw {
        let scheme = s.trim();
        let scheme = scheme.strip_suffix(':').unwrap_or(scheme);

        let mut chars = scheme.chars();
        let well_formed = chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
            });
        if !well_formed {
            return Err(NavGuardError::InvalidRule(format!(
                "invalid allowed_schemes entry: {s:?} (expected lower-case scheme name)"
            )));
        }
        out.insert(scheme.to_string());
    }
    Ok(out)
}

pub fn is_domain_allowed(rules: &[DomainRule], host: &str) -> bool {
    rules.iter().any(|r| r.matches(host))
}

pub fn is_scheme_allowed(schemes: &HashSet<String>, scheme: &str) -> bool {
    schemes.contains(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(raw: &[&str]) -> Vec<DomainRule> {
        let owned: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        compile_domain_rules(&owned).unwrap()
    }

    #[test]
    fn wildcard_matches_base_and_subdomains() {
        let r = rules(&["*.example.com"]);
        assert!(is_domain_allowed(&r, "example.com"));
        assert!(is_domain_allowed(&r, "api.example.com"));
        assert!(is_domain_allowed(&r, "a.b.example.com"));
    }

    #[test]
    fn wildcard_does_not_leak_to_substrings() {
        let r = rules(&["*.example.com"]);
        assert!(!is_domain_allowed(&r, "evilexample.com"));
        assert!(!is_domain_allowed(&r, "example.com.evil.net"));
        assert!(!is_domain_allowed(&r, "xample.com"));
        assert!(!is_domain_allowed(&r, ".example.com.x"));
    }

    #[test]
    fn exact_rule_is_exact() {
        let r = rules(&["Example.COM"]);
        assert_eq!(r, vec![DomainRule::Exact("example.com".into())]);
        assert!(is_domain_allowed(&r, "example.com"));
        assert!(!is_domain_allowed(&r, "www.example.com"));
    }

    #[test]
    fn rejects_malformed_domain_rules() {
        for bad in ["", "*.", "*", "a.*.com", "*example.com", "example.com/path", ".example.com"] {
            assert!(DomainRule::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn schemes_drop_trailing_delimiter() {
        let s = compile_schemes(&["https:".to_string(), "tel".to_string()]).unwrap();
        assert!(is_scheme_allowed(&s, "https"));
        assert!(is_scheme_allowed(&s, "tel"));
        assert!(!is_scheme_allowed(&s, "https:"));
    }

    #[test]
    fn schemes_are_case_sensitive() {
        assert!(compile_schemes(&["HTTPS".to_string()]).is_err());
        let s = compile_schemes(&["https".to_string()]).unwrap();
        assert!(!is_scheme_allowed(&s, "HTTPS"));
    }

    #[test]
    fn rejects_malformed_schemes() {
        for bad in ["", ":", "1http", "ht tp", "*"] {
            assert!(compile_schemes(&[bad.to_string()]).is_err(), "{bad:?} should be rejected");
        }
    }
}
