//! Decision metrics registry.
//!
//! Counter/gauge/histogram types with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors so rendering order per series
//! is deterministic. Histogram buckets are fixed in microseconds.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn render_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn series(name: &str, labels: &str) -> String {
    if labels.is_empty() {
        name.to_string()
    } else {
        format!("{name}{{{labels}}}")
    }
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{} {}", series(name, &render_labels(r.key())), val);
        }
    }
}

#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicI64>,
}

impl GaugeVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }
    pub fn dec(&self, labels: &[(&str, &str)]) {
        self.add(labels, -1);
    }

    fn add(&self, labels: &[(&str, &str)], v: i64) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicI64::new(0))
            .fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> i64 {
        self.map
            .get(&label_key(labels))
            .map(|g| g.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} gauge", name);
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{} {}", series(name, &render_labels(r.key())), val);
        }
    }
}

// Decisions are string parsing plus set lookups, so buckets sit low:
// 1us .. 10ms
const BUCKETS_MICROS: [u64; 9] = [1, 5, 10, 50, 100, 500, 1_000, 5_000, 10_000];

#[derive(Default)]
struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; 9],
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration into cumulative buckets (microsecond scale).
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self.map.entry(label_key(labels)).or_default();
        let micros = duration.as_micros().min(u64::MAX as u128) as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);
        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|h| h.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for r in self.map.iter() {
            let hist = r.value();
            let labels = render_labels(r.key());
            let prefix = if labels.is_empty() { String::new() } else { format!("{labels},") };

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let count = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{}_bucket{{{}le=\"{}\"}} {}", name, prefix, le, count);
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", name, prefix, count);
            let sum = hist.sum.load(Ordering::Relaxed);
            let _ = writeln!(out, "{} {}", series(&format!("{name}_sum"), &labels), sum);
            let _ = writeln!(out, "{} {}", series(&format!("{name}_count"), &labels), count);
        }
    }
}

#[derive(Default)]
pub struct ShellMetrics {
    /// Labels: `outcome`, `reason` (block reason or empty).
    pub decisions: CounterVec,
    /// Labels: `outcome` (see `DelegateOutcome::label`).
    pub delegations: CounterVec,
    pub delegations_in_flight: GaugeVec,
    pub decision_duration: HistogramVec, // In Microseconds
}

impl ShellMetrics {
    /// Render all metrics in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.decisions.render("navguard_decisions_total", &mut out);
        self.delegations.render("navguard_delegations_total", &mut out);
        self.delegations_in_flight.render("navguard_delegations_in_flight", &mut out);
        self.decision_duration.render("navguard_decision_duration_micros", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_are_order_independent() {
        let c = CounterVec::default();
        c.inc(&[("outcome", "block"), ("reason", "not_permitted")]);
        c.inc(&[("reason", "not_permitted"), ("outcome", "block")]);
        assert_eq!(c.get(&[("outcome", "block"), ("reason", "not_permitted")]), 2);
        assert_eq!(c.get(&[("outcome", "render_inline")]), 0);
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let h = HistogramVec::default();
        h.observe(&[], Duration::from_micros(7));
        let m = ShellMetrics { decision_duration: h, ..Default::default() };
        let text = m.render();
        assert!(text.contains("navguard_decision_duration_micros_bucket{le=\"5\"} 0"));
        assert!(text.contains("navguard_decision_duration_micros_bucket{le=\"10\"} 1"));
        assert!(text.contains("navguard_decision_duration_micros_bucket{le=\"+Inf\"} 1"));
        assert!(text.contains("navguard_decision_duration_micros_sum 7"));
    }

    #[test]
    fn gauge_goes_up_and_down() {
        let g = GaugeVec::default();
        g.inc(&[]);
        g.inc(&[]);
        g.dec(&[]);
        assert_eq!(g.get(&[]), 1);
    }
}
