//! Collection helpers over JSON values

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::path::is_truthy;

/// Drop structural duplicates, keeping first-occurrence order.
///
/// Objects compare by content regardless of key order, and integral floats
/// equal their integer form (`1.0` is a duplicate of `1`).
pub fn uniq_objs(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(dedup_key(value)))
        .collect()
}

/// Largest magnitude at which every integer is exact in an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn dedup_key(value: &Value) -> String {
    canonical_numbers(value).to_string()
}

fn canonical_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(canonical_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), canonical_numbers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Drop falsy values (`null`, `false`, `0`, `""`)
pub fn compact(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    values.into_iter().filter(is_truthy).collect()
}

/// Key each item by `key`; later items replace earlier ones
pub fn index_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.into_iter().map(|item| (key(&item), item)).collect()
}

/// Key each object by the text of its `field`. Items without it are skipped.
pub fn index_by_field(values: impl IntoIterator<Item = Value>, field: &str) -> Map<String, Value> {
    let mut out = Map::new();
    for value in values {
        let key = match value.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => continue,
        };
        out.insert(key, value);
    }
    out
}

/// A one-entry object
pub fn kv(key: impl Into<String>, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.into(), value);
    Value::Object(map)
}

/// Project each value onto `fields`; non-objects become `{}`
pub fn map_pick<S: AsRef<str>>(values: &[Value], fields: &[S]) -> Vec<Value> {
    values
        .iter()
        .map(|value| {
            let picked = fields
                .iter()
                .filter_map(|field| {
                    let field = field.as_ref();
                    value.get(field).map(|v| (field.to_string(), v.clone()))
                })
                .collect::<Map<_, _>>();
            Value::Object(picked)
        })
        .collect()
}
