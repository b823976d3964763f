//! langutils - path accessors and async collection combinators

pub mod collections;
pub mod combinators;
pub mod config;
pub mod error;
pub mod path;
pub mod report;
pub mod telemetry;
pub mod validate;

pub use collections::{compact, index_by, index_by_field, kv, map_pick, uniq_objs};
pub use combinators::{
    async_compact_map, async_filter, async_flat_map, cb_pluck, cbify, provide, timed, timed_fn,
    TimedFn,
};
pub use config::LangConfig;
pub use error::{FixSuggestion, LangError};
pub use path::{
    arr_deref, dot_deref, get_path, is_null_or_undefined, is_truthy, select, set_with_path,
    PathExpr, Step, TraversalPolicy,
};
pub use report::{RecordingReporter, ReportEvent, Reporter, TracingReporter};
pub use validate::{assert_fields_present, require_object, require_string};
