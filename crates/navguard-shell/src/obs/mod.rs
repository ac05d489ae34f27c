//! Lightweight in-process decision metrics.
//!
//! Counters for decisions and hand-offs plus a decision-latency histogram,
//! rendered as Prometheus text for whatever diagnostics surface the host has.

pub mod metrics;

pub use metrics::ShellMetrics;
