//! Shape checks for caller-supplied JSON values
//!
//! These guard programmer errors: callers are expected to fix the call site,
//! not recover, so the error carries the offending value verbatim.

use serde_json::{Map, Value};

use crate::error::{LangError, Result};

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), Value::to_string)
}

/// Require a string; returns it borrowed
pub fn require_string<'a>(value: Option<&'a Value>, name: &str) -> Result<&'a str> {
    value
        .and_then(Value::as_str)
        .ok_or_else(|| LangError::Precondition {
            name: name.to_string(),
            expected: "string",
            actual: render(value),
        })
}

/// Require an object (arrays count, as they are objects too)
pub fn require_object<'a>(value: Option<&'a Value>, name: &str) -> Result<&'a Value> {
    match value {
        Some(v) if v.is_object() || v.is_array() => Ok(v),
        _ => Err(LangError::Precondition {
            name: name.to_string(),
            expected: "object",
            actual: render(value),
        }),
    }
}

/// Require every key in `fields` to be present on `object`
pub fn assert_fields_present<S: AsRef<str>>(object: &Map<String, Value>, fields: &[S]) -> Result<()> {
    for field in fields {
        let field = field.as_ref();
        if !object.contains_key(field) {
            return Err(LangError::MissingField {
                field: field.to_string(),
                value: Value::Object(object.clone()).to_string(),
            });
        }
    }
    Ok(())
}
