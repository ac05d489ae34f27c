//! Navigation decision produced once per candidate URL.

use std::fmt;

/// Why a candidate URL was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Empty input, or a script/data/file scheme caught by the sanitizer.
    InvalidOrDangerous,
    /// Passed sanitization but is neither in scope nor safe to hand off.
    NotPermitted,
}

impl BlockReason {
    /// Human-readable reason, also used as a metrics label.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockReason::InvalidOrDangerous => "invalid or dangerous URL",
            BlockReason::NotPermitted => "navigation not permitted",
        }
    }

    /// Short label for metrics.
    pub fn label(self) -> &'static str {
        match self {
            BlockReason::InvalidOrDangerous => "invalid_or_dangerous",
            BlockReason::NotPermitted => "not_permitted",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one candidate URL.
///
/// The embedded browser only proceeds on `RenderInline`; for the other two
/// variants the surface itself never navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the embedded surface.
    RenderInline,
    /// Hand the (sanitized) URL to the platform's registered handler.
    DelegateExternal(String),
    /// Reject outright.
    Block(BlockReason),
}

impl NavigationDecision {
    /// Host mapping: `true` only for `RenderInline`.
    pub fn allows_inline(&self) -> bool {
        matches!(self, NavigationDecision::RenderInline)
    }

    /// Short outcome label (`render_inline`, `delegate_external`, `block`).
    pub fn label(&self) -> &'static str {
        match self {
            NavigationDecision::RenderInline => "render_inline",
            NavigationDecision::DelegateExternal(_) => "delegate_external",
            NavigationDecision::Block(_) => "block",
        }
    }
}

impl fmt::Display for NavigationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationDecision::RenderInline => f.write_str("render_inline"),
            NavigationDecision::DelegateExternal(url) => write!(f, "delegate_external({url})"),
            NavigationDecision::Block(reason) => write!(f, "block({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_render_inline_lets_the_surface_navigate() {
        assert!(NavigationDecision::RenderInline.allows_inline());
        assert!(!NavigationDecision::DelegateExternal("tel:1".into()).allows_inline());
        assert!(!NavigationDecision::Block(BlockReason::NotPermitted).allows_inline());
    }

    #[test]
    fn display_names_the_reason() {
        let d = NavigationDecision::Block(BlockReason::InvalidOrDangerous);
        assert_eq!(d.to_string(), "block(invalid or dangerous URL)");
    }
}
