//! Error-tolerant async filter

use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use tracing::debug;

use crate::report::Reporter;

/// Keep the items whose async predicate resolves to `Ok(true)`.
///
/// A failing predicate excludes its item and is reported, never propagated,
/// so this cannot fail as a whole. All predicates run concurrently; the
/// result keeps input order.
pub async fn async_filter<T, P, Fut, E, R>(items: Vec<T>, predicate: P, reporter: &R) -> Vec<T>
where
    P: Fn(&T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Display,
    R: Reporter + ?Sized,
{
    let total = items.len();
    let verdicts = join_all(items.iter().map(&predicate)).await;

    let kept: Vec<T> = items
        .into_iter()
        .zip(verdicts)
        .filter_map(|(item, verdict)| match verdict {
            Ok(true) => Some(item),
            Ok(false) => None,
            Err(e) => {
                reporter.predicate_failed(&e);
                None
            }
        })
        .collect();

    debug!(total, kept = kept.len(), "Filtered items");
    kept
}
