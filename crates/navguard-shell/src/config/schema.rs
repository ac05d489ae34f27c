use serde::Deserialize;
use navguard_core::error::{NavGuardError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    pub version: u32,

    #[serde(default)]
    pub app: AppSection,

    pub policy: PolicySection,

    #[serde(default)]
    pub webview: WebViewSettings,

    #[serde(default)]
    pub messages: Messages,
}

impl ShellConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NavGuardError::UnsupportedVersion);
        }

        self.app.validate()?;
        self.policy.validate()?;
        self.webview.validate();

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url).map_err(|e| {
            NavGuardError::BadConfig(format!("app.base_url is not a valid url: {e}"))
        })?;
        Ok(())
    }
}

fn default_name() -> String {
    "WebViewApp".into()
}
fn default_base_url() -> String {
    "https://example.com".into()
}

/// Raw allow-lists as written in the file. Compiled by `policy::PolicyConfig`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Exact hostnames or `*.base` wildcard rules.
    pub allowed_domains: Vec<String>,
    /// Schemes, with or without a trailing `:`.
    pub allowed_schemes: Vec<String>,
}

impl PolicySection {
    pub fn validate(&self) -> Result<()> {
        if self.allowed_domains.is_empty() {
            return Err(NavGuardError::BadConfig(
                "policy.allowed_domains must not be empty".into(),
            ));
        }
        if self.allowed_schemes.is_empty() {
            return Err(NavGuardError::BadConfig(
                "policy.allowed_schemes must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// How the embedded browser treats http subresources on https pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedContentMode {
    #[default]
    Never,
    Compatibility,
    Always,
}

/// Embedded-browser settings handed to the host as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WebViewSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub allow_file_access: bool,
    pub allow_file_access_from_file_urls: bool,
    pub allow_universal_access_from_file_urls: bool,
    pub mixed_content_mode: MixedContentMode,
    pub cache_enabled: bool,
    pub third_party_cookies_enabled: bool,
    pub geolocation_enabled: bool,
    pub media_playback_requires_user_action: bool,
    pub allows_inline_media_playback: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            allow_file_access: false,
            allow_file_access_from_file_urls: false,
            allow_universal_access_from_file_urls: false,
            mixed_content_mode: MixedContentMode::Never,
            cache_enabled: true,
            third_party_cookies_enabled: true,
            geolocation_enabled: false,
            media_playback_requires_user_action: false,
            allows_inline_media_playback: true,
        }
    }
}

impl WebViewSettings {
    /// Settings are advisory for the host; questionable values only warn.
    pub fn validate(&self) {
        if self.allow_file_access
            || self.allow_file_access_from_file_urls
            || self.allow_universal_access_from_file_urls
        {
            tracing::warn!("webview file access enabled; file: navigations are still always blocked");
        }
        if self.mixed_content_mode == MixedContentMode::Always {
            tracing::warn!("webview.mixed_content_mode=always lets http subresources load on https pages");
        }
    }
}

/// User-facing texts for the load-error screen and blocked navigations.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Messages {
    pub no_internet: String,
    pub load_error: String,
    pub blocked_navigation: String,
    pub ssl_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_internet: "No internet connection. Please check your network settings.".into(),
            load_error: "Failed to load the page. Please try again.".into(),
            blocked_navigation: "Navigation to this URL is not allowed.".into(),
            ssl_error: "SSL certificate error. Cannot load insecure content.".into(),
        }
    }
}
