//! Completion-handler adapters
//!
//! A completion handler is any `FnOnce(Result<T, E>)`. Each adapter returns a
//! new handler that rewrites the success value and forwards errors untouched.

use serde_json::Value;

use crate::path::{is_truthy, step, Step};

/// Replace whatever the operation produced with `value`.
///
/// `provide(cb, ())` is the degenerate form: the result is discarded and the
/// callback only learns that the operation succeeded.
pub fn provide<T, U, E, C>(cb: C, value: U) -> impl FnOnce(Result<T, E>)
where
    C: FnOnce(Result<U, E>),
{
    move |outcome| match outcome {
        Ok(_) => cb(Ok(value)),
        Err(e) => cb(Err(e)),
    }
}

/// Apply `transform` to a successful result. Never called on error.
pub fn cbify<T, U, E, F, C>(transform: F, cb: C) -> impl FnOnce(Result<T, E>)
where
    F: FnOnce(T) -> U,
    C: FnOnce(Result<U, E>),
{
    move |outcome| cb(outcome.map(transform))
}

/// Forward `result[field]`, or `null` when the result is falsy or lacks it
pub fn cb_pluck<E, C>(cb: C, field: impl Into<String>) -> impl FnOnce(Result<Value, E>)
where
    C: FnOnce(Result<Value, E>),
{
    let field = Step::from_key(&field.into());
    move |outcome| cb(outcome.map(|ret| pluck(&ret, &field)))
}

fn pluck(value: &Value, field: &Step) -> Value {
    if !is_truthy(value) {
        return Value::Null;
    }
    step(value, field).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provide_substitutes_value() {
        let mut got = None;
        provide(|r| got = Some(r), "a")(Ok::<u32, String>(42));
        assert_eq!(got, Some(Ok("a")));
    }

    #[test]
    fn provide_unit_forwards_bare_success() {
        let mut got = None;
        provide(|r| got = Some(r), ())(Ok::<&str, String>("ignored"));
        assert_eq!(got, Some(Ok(())));
    }

    #[test]
    fn provide_forwards_error_untouched() {
        let mut got = None;
        provide(|r| got = Some(r), "a")(Err::<u32, String>("boom".to_string()));
        assert_eq!(got, Some(Err("boom".to_string())));
    }

    #[test]
    fn cbify_transforms_success_only() {
        let mut got = None;
        cbify(|s: String| s.len(), |r| got = Some(r))(Ok::<String, String>("four".to_string()));
        assert_eq!(got, Some(Ok(4)));

        let mut calls = 0;
        let mut got = None;
        cbify(
            |s: String| {
                calls += 1;
                s.len()
            },
            |r| got = Some(r),
        )(Err("nope".to_string()));
        assert_eq!(got, Some(Err("nope".to_string())));
        assert_eq!(calls, 0);
    }

    #[test]
    fn cb_pluck_extracts_field() {
        let mut got = None;
        cb_pluck(|r| got = Some(r), "name")(Ok::<Value, String>(json!({"name": "Alice", "age": 30})));
        assert_eq!(got, Some(Ok(json!("Alice"))));
    }

    #[test]
    fn cb_pluck_falsy_or_missing_is_null() {
        let mut got = None;
        cb_pluck(|r| got = Some(r), "name")(Ok::<Value, String>(json!(null)));
        assert_eq!(got, Some(Ok(Value::Null)));

        let mut got = None;
        cb_pluck(|r| got = Some(r), "name")(Ok::<Value, String>(json!({"other": 1})));
        assert_eq!(got, Some(Ok(Value::Null)));
    }

    #[test]
    fn cb_pluck_indexes_arrays() {
        let mut got = None;
        cb_pluck(|r| got = Some(r), "1")(Ok::<Value, String>(json!(["a", "b"])));
        assert_eq!(got, Some(Ok(json!("b"))));
    }

    #[test]
    fn cb_pluck_forwards_error() {
        let mut got = None;
        cb_pluck(|r| got = Some(r), "name")(Err::<Value, String>("down".to_string()));
        assert_eq!(got, Some(Err("down".to_string())));
    }
}
