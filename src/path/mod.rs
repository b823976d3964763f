//! Path Module - nested value access by path expression
//!
//! - `parse`: path grammar (`a.b[0].c`) → `PathExpr` of `Step`s
//! - `access`: read (`select`, `get_path`) and write (`set_with_path`)
//!   against `serde_json::Value`, under a `TraversalPolicy`

mod access;
mod parse;

pub use access::{
    arr_deref, dot_deref, get_path, is_null_or_undefined, is_truthy, select, set_with_path, step,
    value_kind, TraversalPolicy,
};
pub use parse::{PathExpr, Step};
