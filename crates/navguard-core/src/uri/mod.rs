//! Candidate URL handling (sanitizer + inspection helpers).
//!
//! Candidate URLs are opaque strings from the embedded browser or from
//! in-page script. Nothing here panics or propagates parse errors: an
//! unparseable URL simply yields `None`/`false`.

pub mod inspect;
pub mod sanitize;

pub use inspect::{extract_domain, host_of, is_insecure_url, is_secure_transport, parse_candidate, scheme_of};
pub use sanitize::{dangerous_scheme, sanitize, SanitizeRejection, DANGEROUS_SCHEMES};
