//! End-to-end merge scenarios exercised through the public `merge` entry
//! point, using JSON fixtures the way reconciliation pipelines would.

use rstest::rstest;
use serde_json::{Value, json};
use structured_merge::{
    Aggregator, Document, Mapping, MergeStrategy, merge, merge_smart, merge_with,
};

fn mapping(value: Value) -> Mapping {
    match Document::from(value) {
        Document::Mapping(m) => m,
        other => panic!("expected a mapping fixture, got {other:?}"),
    }
}

fn merged_json(base: Value, overlay: Value, strategy: &str) -> Value {
    merge(&mapping(base), &mapping(overlay), strategy, "yaml").into()
}

#[rstest]
#[case::recurse_nested(
    json!({"a": {"x": 1, "y": 2}, "b": 5}),
    json!({"a": {"y": 9}, "c": 3}),
    "recurse",
    json!({"a": {"x": 1, "y": 9}, "b": 5, "c": 3})
)]
#[case::recurse_empty_overlay(json!({"a": 1, "b": {"c": 2}}), json!({}), "recurse", json!({"a": 1, "b": {"c": 2}}))]
#[case::recurse_empty_base(json!({}), json!({"a": 1, "b": {"c": 2}}), "recurse", json!({"a": 1, "b": {"c": 2}}))]
#[case::recurse_skips_empty_key(json!({"a": 1}), json!({"": 10, "z": 1}), "recurse", json!({"a": 1, "z": 1}))]
#[case::list_pairs(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4}), "list", json!({"a": 1, "b": [2, 3]}))]
#[case::overwrite_shared_keys(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4}), "overwrite", json!({"a": 1, "b": 3, "c": 4}))]
#[case::aggregate_collects_root(json!({"k": 1, "only": true}), json!({"k": 2}), "aggregate", json!({"k": [1, 2], "only": true}))]
fn merge_matches_expected(
    #[case] base: Value,
    #[case] overlay: Value,
    #[case] strategy: &str,
    #[case] expected: Value,
) {
    assert_eq!(merged_json(base, overlay, strategy), expected);
}

#[test]
fn recurse_result_contains_every_overlay_key() {
    let base = mapping(json!({"a": {"x": 1}, "b": 5}));
    let overlay = mapping(json!({"a": {"y": 9}, "c": 3, "d": [1]}));
    let merged = merge(&base, &overlay, "recurse", "yaml");
    let result = merged.as_mapping();
    for key in overlay.keys() {
        assert!(
            result.is_some_and(|m| m.contains_key(key)),
            "missing overlay key {key}"
        );
    }
}

#[test]
fn list_result_keys_are_exactly_base_keys() {
    let base = mapping(json!({"a": 1, "b": 2}));
    let overlay = mapping(json!({"b": 3, "c": 4}));
    let merged = merge(&base, &overlay, "list", "yaml");
    let keys: Option<Vec<&str>> = merged
        .as_mapping()
        .map(|m| m.keys().map(String::as_str).collect());
    assert_eq!(keys, Some(vec!["a", "b"]));
}

#[test]
fn unknown_strategy_behaves_like_recurse() {
    let base = json!({"a": {"x": 1}, "b": 5});
    let overlay = json!({"a": {"y": 9}, "c": 3});
    assert_eq!(
        merged_json(base.clone(), overlay.clone(), "bogus"),
        merged_json(base, overlay, "recurse")
    );
}

#[test]
fn smart_defaults_to_recurse_for_yaml() {
    let base = mapping(json!({"k": 1}));
    let overlay = mapping(json!({"k": 2}));
    let merged: Value = merge_smart(&base, &overlay, "yaml").into();
    assert_eq!(merged, json!({"k": 2}));
}

#[rstest]
#[case::yamlex("yamlex")]
#[case::yamlex_dialect("yamlex_v2")]
fn smart_aggregates_for_yamlex(#[case] hint: &str) {
    let base = mapping(json!({"k": 1}));
    let overlay = mapping(json!({"k": 2}));
    let merged: Value = merge_smart(&base, &overlay, hint).into();
    assert_eq!(merged, json!({"k": [1, 2]}));
}

struct OverlayWins;

impl Aggregator for OverlayWins {
    fn aggregate(&self, _base: &Document, overlay: &Document, _level: u32) -> Document {
        overlay.clone()
    }
}

#[test]
fn merge_with_accepts_a_custom_aggregator() {
    let base = mapping(json!({"k": 1}));
    let overlay = mapping(json!({"k": 2, "extra": true}));
    let merged = merge_with(
        &base,
        &overlay,
        MergeStrategy::Aggregate,
        "yaml",
        &OverlayWins,
    );
    assert_eq!(Value::from(merged), json!({"k": 2, "extra": true}));
}

#[test]
fn merge_never_mutates_its_inputs() {
    let base = mapping(json!({"a": {"x": 1}}));
    let overlay = mapping(json!({"a": {"y": 2}}));
    for strategy in ["recurse", "aggregate", "overwrite", "list", "smart"] {
        let _merged = merge(&base, &overlay, strategy, "yaml");
    }
    assert_eq!(Value::from(base), json!({"a": {"x": 1}}));
    assert_eq!(Value::from(overlay), json!({"a": {"y": 2}}));
}
