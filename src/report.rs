//! Diagnostic sink for timing and filtering
//!
//! Combinators never write to a global logger directly; they report through
//! a `Reporter`. `TracingReporter` forwards to `tracing`, `RecordingReporter`
//! keeps events in memory so tests can assert on them.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{info, warn};

/// Receives human-readable diagnostics from the combinators
pub trait Reporter: Send + Sync {
    /// A timed operation started (only when no minimum duration is set)
    fn timing_started(&self, label: &str);

    /// A timed operation completed and passed the duration threshold
    fn timing_finished(&self, label: &str, duration: Duration);

    /// A timed operation completed with an error
    fn timing_failed(&self, label: &str, error: &dyn Display);

    /// A filter predicate failed; its item is excluded
    fn predicate_failed(&self, error: &dyn Display);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn timing_started(&self, label: &str) {
        (**self).timing_started(label);
    }

    fn timing_finished(&self, label: &str, duration: Duration) {
        (**self).timing_finished(label, duration);
    }

    fn timing_failed(&self, label: &str, error: &dyn Display) {
        (**self).timing_failed(label, error);
    }

    fn predicate_failed(&self, error: &dyn Display) {
        (**self).predicate_failed(error);
    }
}

/// Default reporter: structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn timing_started(&self, label: &str) {
        info!(label, "\"{}\" timed execution starting...", label);
    }

    fn timing_finished(&self, label: &str, duration: Duration) {
        let duration_ms = duration.as_millis() as u64;
        info!(label, duration_ms, "\"{}\" took {}ms", label, duration_ms);
    }

    fn timing_failed(&self, label: &str, error: &dyn Display) {
        warn!(label, error = %error, "\"{}\" returned with an error.", label);
    }

    fn predicate_failed(&self, error: &dyn Display) {
        warn!(error = %error, "Filter predicate failed, excluding item");
    }
}

/// One captured diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Started { label: String },
    Finished { label: String, duration: Duration },
    Failed { label: String, error: String },
    PredicateFailed { error: String },
}

/// In-memory reporter for tests and embedding
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    /// Durations reported for `label`
    pub fn durations(&self, label: &str) -> Vec<Duration> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Finished { label: l, duration } if l == label => Some(*duration),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn timing_started(&self, label: &str) {
        self.push(ReportEvent::Started {
            label: label.to_string(),
        });
    }

    fn timing_finished(&self, label: &str, duration: Duration) {
        self.push(ReportEvent::Finished {
            label: label.to_string(),
            duration,
        });
    }

    fn timing_failed(&self, label: &str, error: &dyn Display) {
        self.push(ReportEvent::Failed {
            label: label.to_string(),
            error: error.to_string(),
        });
    }

    fn predicate_failed(&self, error: &dyn Display) {
        self.push(ReportEvent::PredicateFailed {
            error: error.to_string(),
        });
    }
}
