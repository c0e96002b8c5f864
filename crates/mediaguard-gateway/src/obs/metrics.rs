//! Counter registry for guard outcomes.
//!
//! Label sets are sorted before insertion so `[("a", ..), ("b", ..)]` and
//! `[("b", ..), ("a", ..)]` land on the same series.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

type LabelKey = Vec<(String, String)>;

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let labels = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (labels, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (labels, val) in rows {
            if labels.is_empty() {
                let _ = writeln!(out, "{name} {val}");
            } else {
                let _ = writeln!(out, "{name}{{{labels}}} {val}");
            }
        }
    }
}

#[derive(Default)]
pub struct GatewayMetrics {
    /// outcome = allow | deny | error
    pub decisions: CounterVec,
    /// Paths refused before policy evaluation (not normalized).
    pub rejected_paths: CounterVec,
    pub auth_failures: CounterVec,
}

impl GatewayMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.decisions.render("mediaguard_decisions_total", &mut out);
        self.rejected_paths.render("mediaguard_rejected_paths_total", &mut out);
        self.auth_failures.render("mediaguard_auth_failures_total", &mut out);
        out
    }
}
