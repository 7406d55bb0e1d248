//! Minimal metrics registry for the backend.
//!
//! Counters are plain atomics owned by `BackendMetrics`, which the composition
//! root builds once and shares by `Arc`. Rendering follows the Prometheus text
//! exposition format (version 0.0.4).

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Content type for the text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Monotonic counter. Never decremented, never reset.
#[derive(Debug)]
pub struct Counter {
    name: &'static str,
    help: &'static str,
    value: AtomicU64,
}

impl Counter {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            value: AtomicU64::new(0),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(self.help));
        let _ = writeln!(out, "# TYPE {} counter", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

#[derive(Debug)]
pub struct BackendMetrics {
    /// Application requests seen by the counting middleware.
    pub hits: Counter,
}

impl Default for BackendMetrics {
    fn default() -> Self {
        Self {
            hits: Counter::new("hits_counter", "Number of hits to the server"),
        }
    }
}

impl BackendMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all registered counters.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.hits.render(&mut out);
        out
    }
}
