//! External delegate: platform hand-off for `DelegateExternal` decisions.
//!
//! Re-exports the handler trait so hosts can implement it against their
//! platform's URL-opening service.

pub mod external;

pub use external::{DelegateOutcome, ExternalDelegate, HandlerError, UrlHandler};
