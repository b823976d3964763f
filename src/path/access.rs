//! Reading and writing nested values by path

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::parse::{piece_step, PathExpr, Step};
use crate::error::{LangError, Result};

/// When traversal gives up before the path is exhausted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalPolicy {
    /// Only an absent step short-circuits. `0`, `""`, `false` are real values.
    #[default]
    PresenceOnly,
    /// Any falsy value ends traversal and is returned as the result.
    Truthy,
}

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// True for a missing value or an explicit `null`
pub fn is_null_or_undefined(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Name of a value's JSON type, for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Subscript one step. Mappings and sequences share one subscript rule:
/// indices address object keys by their decimal text.
pub fn step<'a>(value: &'a Value, step: &Step) -> Option<&'a Value> {
    match (value, step) {
        (Value::Object(map), step) => map.get(&step.as_key()),
        (Value::Array(items), Step::Index(index)) => items.get(*index),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, step: &Step) -> Option<&'a mut Value> {
    match (value, step) {
        (Value::Object(map), step) => map.get_mut(&step.as_key()),
        (Value::Array(items), Step::Index(index)) => items.get_mut(*index),
        _ => None,
    }
}

/// Resolve one bracket piece of a dotted segment.
///
/// `position` 0 is the base key; later pieces are bracket contents with
/// their trailing `]`. An empty piece leaves `value` unchanged.
pub fn arr_deref<'a>(
    value: &'a Value,
    piece: &str,
    position: usize,
    policy: TraversalPolicy,
) -> Option<&'a Value> {
    if policy == TraversalPolicy::Truthy && !is_truthy(value) {
        return Some(value);
    }

    match piece_step(piece, position) {
        Some(s) => step(value, &s),
        None => Some(value),
    }
}

/// Resolve one dotted segment, brackets included
pub fn dot_deref<'a>(value: &'a Value, segment: &str, policy: TraversalPolicy) -> Option<&'a Value> {
    segment
        .split('[')
        .enumerate()
        .try_fold(value, |current, (position, piece)| {
            arr_deref(current, piece, position, policy)
        })
}

impl PathExpr {
    /// Evaluate against `root`
    pub fn resolve<'a>(&self, root: &'a Value, policy: TraversalPolicy) -> Option<&'a Value> {
        let mut current = root;

        for s in self.steps() {
            if policy == TraversalPolicy::Truthy && !is_truthy(current) {
                return Some(current);
            }
            current = step(current, s)?;
        }

        Some(current)
    }
}

/// Read the value at a dotted/bracketed `path`. Never errors.
pub fn select<'a>(container: &'a Value, path: &str, policy: TraversalPolicy) -> Option<&'a Value> {
    PathExpr::parse(path).resolve(container, policy)
}

/// Read by a sequence of plain keys (no path grammar)
pub fn get_path<'a, K: AsRef<str>>(
    container: Option<&'a Value>,
    keys: &[K],
    policy: TraversalPolicy,
) -> Option<&'a Value> {
    let keep = |value: &Value| match policy {
        TraversalPolicy::Truthy => is_truthy(value),
        TraversalPolicy::PresenceOnly => true,
    };

    let mut current = container.filter(|&v| keep(v))?;
    for key in keys {
        current = step(current, &Step::from_key(key.as_ref())).filter(|&v| keep(v))?;
    }

    Some(current)
}

/// Write `value` at `path`, mutating the parent in place.
///
/// Every intermediate must already exist as an object or array; nothing is
/// created along the way.
pub fn set_with_path(container: &mut Value, path: &str, value: Value) -> Result<()> {
    let expr = PathExpr::parse(path);
    let Some((last, parents)) = expr.split_last() else {
        return Err(LangError::InvalidPath {
            path: path.to_string(),
            reason: "empty path".to_string(),
        });
    };

    let dereference = |s: &Step, kind: &str| LangError::Dereference {
        segment: s.to_string(),
        value_type: kind.to_string(),
        path: path.to_string(),
    };

    let mut parent = container;
    for s in parents {
        let kind = value_kind(parent);
        parent = step_mut(parent, s).ok_or_else(|| dereference(s, kind))?;
    }

    debug!(path, parent = value_kind(parent), "Setting value at path");

    match (parent, last) {
        (Value::Object(map), s) => {
            map.insert(s.as_key(), value);
            Ok(())
        }
        (Value::Array(items), Step::Index(index)) => {
            let len = items.len();
            if *index < len {
                items[*index] = value;
                Ok(())
            } else if *index == len {
                items.push(value);
                Ok(())
            } else {
                Err(LangError::IndexOutOfBounds {
                    index: *index,
                    len,
                    path: path.to_string(),
                })
            }
        }
        (other, s) => Err(dereference(s, value_kind(other))),
    }
}
