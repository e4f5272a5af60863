//! Unit tests for the document model and serde conversions.

use rstest::rstest;
use serde_json::{Value, json};

use super::{Document, Mapping, Scalar};

#[test]
fn mappings_iterate_in_insertion_order() {
    let mut mapping = Mapping::new();
    mapping.insert("zebra", 1_i64);
    mapping.insert("apple", 2_i64);
    mapping.insert("mango", 3_i64);
    let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn insert_replaces_and_returns_previous_value() {
    let mut mapping = Mapping::new();
    mapping.insert("k", 1_i64);
    let previous = mapping.insert("k", 2_i64);
    assert_eq!(previous, Some(Document::from(1_i64)));
    assert_eq!(mapping.len(), 1);
}

#[test]
fn order_preserving_tag_is_orthogonal_to_contents() {
    let mut ordered = Mapping::order_preserving();
    ordered.insert("k", 1_i64);
    assert!(ordered.is_order_preserving());
    assert!(!Mapping::new().is_order_preserving());
    assert!(Document::Mapping(ordered).is_mapping());
}

#[rstest]
#[case::null(json!(null), Document::Scalar(Scalar::Null))]
#[case::boolean(json!(true), Document::from(true))]
#[case::integer(json!(7), Document::from(7_i64))]
#[case::float(json!(2.5), Document::from(2.5_f64))]
#[case::string(json!("text"), Document::from("text"))]
fn scalars_convert_from_json(#[case] value: Value, #[case] expected: Document) {
    assert_eq!(Document::from(value), expected);
}

#[test]
fn json_objects_become_plain_mappings() {
    let document = Document::from(json!({"a": 1, "b": [true, null]}));
    let mapping = document.as_mapping();
    assert!(mapping.is_some_and(|m| !m.is_order_preserving()));
    assert_eq!(
        mapping.and_then(|m| m.get("b")),
        Some(&Document::Sequence(vec![
            Document::from(true),
            Document::Scalar(Scalar::Null),
        ]))
    );
}

#[test]
fn documents_round_trip_through_json() {
    let source = json!({"a": {"x": 1}, "b": [1, "two", 3.5], "c": null});
    assert_eq!(Value::from(Document::from(source.clone())), source);
}

#[test]
fn documents_serialise_directly() {
    let mut mapping = Mapping::order_preserving();
    mapping.insert("name", "merged");
    mapping.insert("count", 3_i64);
    assert_eq!(
        serde_json::to_value(Document::Mapping(mapping)).ok(),
        Some(json!({"name": "merged", "count": 3}))
    );
}

#[test]
fn non_finite_floats_serialise_as_null() {
    let document = Document::from(f64::NAN);
    assert_eq!(Value::from(document), Value::Null);
}

#[test]
fn collects_from_pairs() {
    let mapping: Mapping = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
    assert_eq!(mapping.len(), 2);
    assert!(mapping.contains_key("a"));
    assert!(!mapping.is_order_preserving());
}
