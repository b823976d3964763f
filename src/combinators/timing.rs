//! Timing instrumentation for async operations
//!
//! Uses `tokio::time::Instant`, so a paused test clock gives exact durations.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::report::{Reporter, TracingReporter};

/// Label used when a wrapped function has no usable name
pub const ANONYMOUS_LABEL: &str = "anonymous function";

/// Run `operation` and report how long it took.
///
/// With no `min_duration` (or a zero one) the start is reported and the
/// duration always is; otherwise the duration is reported only when it
/// strictly exceeds the minimum. Errors are reported and returned unchanged.
pub async fn timed<Op, Fut, T, E, R>(
    label: &str,
    operation: Op,
    reporter: &R,
    min_duration: Option<Duration>,
) -> Result<T, E>
where
    Op: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    R: Reporter + ?Sized,
{
    let min_duration = min_duration.filter(|min| !min.is_zero());
    if min_duration.is_none() {
        reporter.timing_started(label);
    }

    let start = Instant::now();
    let result = operation().await;
    let duration = start.elapsed();

    if min_duration.map_or(true, |min| duration > min) {
        reporter.timing_finished(label, duration);
    }

    if let Err(e) = &result {
        reporter.timing_failed(label, e);
    }

    result
}

/// Label for a function type: its own name, or `ANONYMOUS_LABEL` for closures
pub fn function_label<F>() -> String {
    let full = std::any::type_name::<F>();
    if full.contains("{{closure}}") {
        return ANONYMOUS_LABEL.to_string();
    }

    let base = full.split('<').next().unwrap_or(full);
    match base.rsplit("::").next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS_LABEL.to_string(),
    }
}

/// An async function whose every call is timed
#[derive(Debug, Clone)]
pub struct TimedFn<F, R = TracingReporter> {
    f: F,
    label: String,
    min_duration: Option<Duration>,
    reporter: R,
}

impl<F> TimedFn<F> {
    /// Wrap `f`, labelled with its own name
    pub fn new(f: F, min_duration: Option<Duration>) -> Self {
        Self {
            label: function_label::<F>(),
            f,
            min_duration,
            reporter: TracingReporter,
        }
    }
}

impl<F, R> TimedFn<F, R> {
    /// Override the label
    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Report to `reporter` instead
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> TimedFn<F, R2> {
        TimedFn {
            f: self.f,
            label: self.label,
            min_duration: self.min_duration,
            reporter,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_duration(&self) -> Option<Duration> {
        self.min_duration
    }

    /// Invoke the wrapped function with `args` (use a tuple for several)
    pub async fn call<A, Fut, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        R: Reporter,
    {
        timed(&self.label, || (self.f)(args), &self.reporter, self.min_duration).await
    }
}

/// Wrap `f` so every call is timed under its own name
pub fn timed_fn<F>(f: F, min_duration: Option<Duration>) -> TimedFn<F> {
    TimedFn::new(f, min_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{RecordingReporter, ReportEvent};
    use std::sync::Arc;

    async fn fetch_user(id: u32) -> Result<String, String> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        if id == 0 {
            Err("no such user".to_string())
        } else {
            Ok(format!("user-{}", id))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn below_minimum_reports_nothing() {
        let reporter = RecordingReporter::new();
        let out = timed("fetch", || fetch_user(7), &reporter, Some(Duration::from_millis(10))).await;

        assert_eq!(out, Ok("user-7".to_string()));
        assert!(reporter.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn no_minimum_always_reports() {
        let reporter = RecordingReporter::new();
        let out = timed("fetch", || fetch_user(7), &reporter, None).await;

        assert_eq!(out, Ok("user-7".to_string()));
        assert_eq!(
            reporter.events(),
            vec![
                ReportEvent::Started {
                    label: "fetch".to_string()
                },
                ReportEvent::Finished {
                    label: "fetch".to_string(),
                    duration: Duration::from_millis(5)
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn above_minimum_reports_duration_only() {
        let reporter = RecordingReporter::new();
        timed("fetch", || fetch_user(7), &reporter, Some(Duration::from_millis(2)))
            .await
            .unwrap();

        assert_eq!(reporter.durations("fetch"), vec![Duration::from_millis(5)]);
        assert_eq!(reporter.events().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn error_is_reported_and_forwarded() {
        let reporter = RecordingReporter::new();
        let out = timed("fetch", || fetch_user(0), &reporter, Some(Duration::from_millis(10))).await;

        assert_eq!(out, Err("no such user".to_string()));
        assert_eq!(
            reporter.events(),
            vec![ReportEvent::Failed {
                label: "fetch".to_string(),
                error: "no such user".to_string()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_minimum_behaves_as_unset() {
        let reporter = RecordingReporter::new();
        timed("fetch", || fetch_user(1), &reporter, Some(Duration::ZERO))
            .await
            .unwrap();

        assert_eq!(reporter.events().len(), 2);
    }

    #[test]
    fn label_uses_function_name() {
        assert_eq!(timed_fn(fetch_user, None).label(), "fetch_user");
    }

    #[test]
    fn label_falls_back_for_closures() {
        let f = |x: u32| async move { Ok::<u32, String>(x) };
        assert_eq!(timed_fn(f, None).label(), ANONYMOUS_LABEL);
        assert_eq!(timed_fn(f, None).named("double").label(), "double");
    }

    #[tokio::test(start_paused = true)]
    async fn timed_fn_times_every_call() {
        let reporter = Arc::new(RecordingReporter::new());
        let wrapped = timed_fn(fetch_user, None).with_reporter(Arc::clone(&reporter));

        assert_eq!(wrapped.call(1).await, Ok("user-1".to_string()));
        assert_eq!(wrapped.call(0).await, Err("no such user".to_string()));

        assert_eq!(
            reporter.durations("fetch_user"),
            vec![Duration::from_millis(5), Duration::from_millis(5)]
        );
        assert!(reporter.events().contains(&ReportEvent::Failed {
            label: "fetch_user".to_string(),
            error: "no such user".to_string()
        }));
    }
}
