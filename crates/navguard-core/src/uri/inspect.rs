//! URL inspection helpers. All of them fail closed on parse errors.

use url::Url;

/// Scheme that may render inside the embedded surface.
pub const SECURE_TRANSPORT_SCHEME: &str = "https";

/// Parse a candidate URL, discarding the parse error.
pub fn parse_candidate(url: &str) -> Option<Url> {
    Url::parse(url).ok()
}

/// Scheme without the trailing `:` (the parser lower-cases it).
pub fn scheme_of(url: &str) -> Option<String> {
    parse_candidate(url).map(|u| u.scheme().to_string())
}

/// Lower-cased hostname, `None` if unparseable or the URL carries no host
/// (`tel:`, `mailto:`, ...).
pub fn host_of(url: &str) -> Option<String> {
    let parsed = parse_candidate(url)?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}

/// Hostname as the parser reports it, or `None`.
pub fn extract_domain(url: &str) -> Option<String> {
    parse_candidate(url).and_then(|u| u.host_str().map(str::to_string))
}

/// Plain `http://` link (case-insensitive prefix).
pub fn is_insecure_url(url: &str) -> bool {
    url.get(..7)
        .is_some_and(|head| head.eq_ignore_ascii_case("http://"))
}

/// Parsed scheme is the secure transport scheme.
pub fn is_secure_transport(url: &str) -> bool {
    parse_candidate(url).is_some_and(|u| u.scheme() == SECURE_TRANSPORT_SCHEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_lowercased() {
        assert_eq!(host_of("https://API.Example.COM/x").as_deref(), Some("api.example.com"));
        assert_eq!(host_of("sms://Evil.Example").as_deref(), Some("evil.example"));
    }

    #[test]
    fn hostless_and_garbage_yield_none() {
        assert_eq!(host_of("tel:+15551234567"), None);
        assert_eq!(host_of("mailto:a@example.com"), None);
        assert_eq!(host_of("not a url"), None);
        assert_eq!(scheme_of("::::"), None);
    }

    #[test]
    fn scheme_has_no_delimiter() {
        assert_eq!(scheme_of("HTTPS://example.com").as_deref(), Some("https"));
        assert_eq!(scheme_of("tel:+1").as_deref(), Some("tel"));
    }

    #[test]
    fn insecure_and_secure_detection() {
        assert!(is_insecure_url("HTTP://example.com"));
        assert!(!is_insecure_url("https://example.com"));
        assert!(!is_insecure_url("http:"));
        assert!(is_secure_transport("https://example.com"));
        assert!(is_secure_transport("HTTPS://example.com"));
        assert!(!is_secure_transport("http://example.com"));
        assert!(!is_secure_transport("https//example.com"));
    }

    #[test]
    fn extract_domain_keeps_parser_form() {
        assert_eq!(extract_domain("https://www.example.com:8443/p").as_deref(), Some("www.example.com"));
        assert_eq!(extract_domain("garbage"), None);
    }
}
