//! Host integration: navigation intercept adapter and page-load state.

pub mod adapter;
pub mod page;

pub use adapter::{Navigation, NavigationHost};
pub use page::{LoadError, LoadErrorKind, LoadState, PageState};
