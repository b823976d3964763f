//! Property-Based Testing for path access
//!
//! - Parsing and selection never panic on arbitrary input
//! - set_with_path followed by select returns the written value
//! - Display of a parsed path re-parses to the same steps

use langutils::{select, set_with_path, PathExpr, TraversalPolicy};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

prop_compose! {
    /// Object keys that cannot be mistaken for indices or grammar
    fn arb_key()(key in r"[a-z][a-z_]{0,7}") -> String {
        key
    }
}

/// Build `{k0: {k1: {... {}}}}` so every intermediate exists
fn nested_chain(keys: &[String]) -> Value {
    keys.iter().rev().fold(json!({}), |inner, key| {
        let mut map = Map::new();
        map.insert(key.clone(), inner);
        Value::Object(map)
    })
}

proptest! {
    #[test]
    fn parse_never_panics(path in ".*") {
        let _ = PathExpr::parse(&path);
        let _ = PathExpr::parse_strict(&path);
    }

    #[test]
    fn select_never_panics(path in r"[a-z0-9\.\[\]]{0,24}") {
        let doc = json!({"a": [{"b": 0}, {"c": [1, 2]}], "0": {"a": null}});
        let _ = select(&doc, &path, TraversalPolicy::Truthy);
        let _ = select(&doc, &path, TraversalPolicy::PresenceOnly);
    }

    #[test]
    fn set_then_select_round_trips(
        keys in prop::collection::vec(arb_key(), 1..6),
        leaf in arb_key(),
        value in any::<i64>(),
    ) {
        let mut doc = nested_chain(&keys);
        let path = format!("{}.{}", keys.join("."), leaf);

        set_with_path(&mut doc, &path, json!(value)).unwrap();

        prop_assert_eq!(select(&doc, &path, TraversalPolicy::PresenceOnly), Some(&json!(value)));
    }

    #[test]
    fn display_reparses_to_same_steps(
        keys in prop::collection::vec(arb_key(), 1..5),
        index in 0usize..50,
    ) {
        let path = format!("{}[{}]", keys.join("."), index);
        let expr = PathExpr::parse_strict(&path).unwrap();
        prop_assert_eq!(PathExpr::parse(&expr.to_string()), expr);
    }
}
