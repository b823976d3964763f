//! Async Combinators - control flow over fallible async operations
//!
//! - `callback`: completion-handler adapters (`provide`, `cbify`, `cb_pluck`)
//! - `gather`: ordered fail-fast fan-out (`async_compact_map`, `async_flat_map`)
//! - `filter`: error-tolerant `async_filter`
//! - `timing`: `timed` and `TimedFn`
//!
//! Errors always pass through untouched; only `async_filter` absorbs them.

mod callback;
mod filter;
mod gather;
mod timing;

pub use callback::{cb_pluck, cbify, provide};
pub use filter::async_filter;
pub use gather::{async_compact_map, async_flat_map, gather_ordered};
pub use timing::{function_label, timed, timed_fn, TimedFn, ANONYMOUS_LABEL};
