#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use navguard_shell::config::{self, MixedContentMode};
use navguard_shell::policy::{DomainRule, PolicyConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
policy:
  allowed_domains: ["example.com"]
  allowed_schemes: ["https"]
  alowed_hosts: ["evil.com"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
policy:
  allowed_domains: ["example.com"]
  allowed_schemes: ["https"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.app.name, "WebViewApp");
    assert_eq!(cfg.app.base_url, "https://example.com");
    assert!(cfg.webview.javascript_enabled);
    assert!(!cfg.webview.allow_file_access);
    assert_eq!(cfg.webview.mixed_content_mode, MixedContentMode::Never);
    assert_eq!(cfg.messages.blocked_navigation, "Navigation to this URL is not allowed.");
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
policy:
  allowed_domains: ["example.com"]
  allowed_schemes: ["https"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_allow_lists_are_rejected() {
    let no_domains = r#"
version: 1
policy:
  allowed_domains: []
  allowed_schemes: ["https"]
"#;
    let no_schemes = r#"
version: 1
policy:
  allowed_domains: ["example.com"]
  allowed_schemes: []
"#;
    for s in [no_domains, no_schemes] {
        let err = config::load_from_str(s).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG");
    }
}

#[test]
fn invalid_base_url_is_rejected() {
    let bad = r#"
version: 1
app:
  base_url: "not a url"
policy:
  allowed_domains: ["example.com"]
  allowed_schemes: ["https"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn compiled_policy_normalizes_entries() {
    let s = r#"
version: 1
app:
  name: Shop
  base_url: https://Shop.Example.com
policy:
  allowed_domains: ["Shop.Example.COM", "*.CDN.example.com"]
  allowed_schemes: ["https:", "mailto"]
webview:
  geolocation_enabled: true
  mixed_content_mode: compatibility
"#;
    let cfg = config::load_from_str(s).unwrap();
    assert!(cfg.webview.geolocation_enabled);
    assert_eq!(cfg.webview.mixed_content_mode, MixedContentMode::Compatibility);

    let policy = PolicyConfig::new(cfg.app.base_url.clone(), &cfg.policy).unwrap();
    assert_eq!(
        policy.allowed_domains(),
        &[
            DomainRule::Exact("shop.example.com".into()),
            DomainRule::Wildcard("cdn.example.com".into()),
        ]
    );
    assert!(policy.allowed_schemes().contains("https"));
    assert!(!policy.allowed_schemes().contains("https:"));
}

#[test]
fn bad_rules_fail_compilation() {
    let s = r#"
version: 1
policy:
  allowed_domains: ["*.example.*"]
  allowed_schemes: ["https"]
"#;
    let cfg = config::load_from_str(s).unwrap();
    let err = PolicyConfig::new(cfg.app.base_url.clone(), &cfg.policy).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_RULE");
}
