//! Ordered, fail-fast fan-out over a collection
//!
//! Every element is spawned onto the runtime up front. Results land in their
//! input slot, so completion order never shows in the output. The first error
//! ends the gather; tasks already dispatched keep running detached.

use std::future::Future;
use std::panic;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

/// Run `f` over every input concurrently, collecting results in input order.
///
/// Must be called from within a tokio runtime.
pub async fn gather_ordered<I, F, Fut, T, E>(inputs: I, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    // Dropping a JoinHandle detaches its task, so an early return leaves
    // stragglers running.
    let mut pending: FuturesUnordered<_> = inputs
        .into_iter()
        .map(f)
        .map(tokio::spawn)
        .enumerate()
        .map(|(index, handle)| async move { (index, handle.await) })
        .collect();

    let total = pending.len();
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(total).collect();

    while let Some((index, joined)) = pending.next().await {
        let result = match joined {
            Ok(result) => result,
            Err(join_err) => match join_err.try_into_panic() {
                Ok(payload) => panic::resume_unwind(payload),
                Err(join_err) => panic!("gather element {} was cancelled: {}", index, join_err),
            },
        };

        match result {
            Ok(value) => slots[index] = Some(value),
            Err(e) => {
                debug!(index, total, in_flight = pending.len(), "Gather failed fast, detaching stragglers");
                return Err(e);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Map concurrently and drop `None` results, keeping input order
pub async fn async_compact_map<I, F, Fut, U, E>(inputs: I, f: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<Option<U>, E>> + Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
{
    let results = gather_ordered(inputs, f).await?;
    Ok(results.into_iter().flatten().collect())
}

/// Map concurrently and flatten each result one level, keeping input order.
///
/// A result may be any `IntoIterator`: `None` contributes nothing, `Some(x)`
/// contributes `x`, a `Vec` contributes all of its items unchanged.
pub async fn async_flat_map<I, F, Fut, R, E>(inputs: I, f: F) -> Result<Vec<R::Item>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: IntoIterator + Send + 'static,
    E: Send + 'static,
{
    let results = gather_ordered(inputs, f).await?;
    Ok(results.into_iter().flatten().collect())
}
