use ferrum_format::{
    json_diff, parse, parse_resource, resource_type_of, semantically_equal, to_pretty_string,
    DifferenceKind, FormatError,
};
use serde_json::json;

#[test]
fn test_key_order_is_ignored() {
    let expected = parse(r#"{"resourceType": "Patient", "id": "a", "active": true}"#).unwrap();
    let actual = parse(r#"{"active": true, "id": "a", "resourceType": "Patient"}"#).unwrap();
    assert!(semantically_equal(&expected, &actual));
}

#[test]
fn test_numbers_compare_by_value() {
    assert!(semantically_equal(&json!({"value": 185}), &json!({"value": 185.0})));
    assert!(semantically_equal(
        &parse(r#"{"value": 0.50}"#).unwrap(),
        &parse(r#"{"value": 0.5}"#).unwrap()
    ));
    assert!(!semantically_equal(&json!({"value": 185}), &json!({"value": 186})));
    assert!(!semantically_equal(&json!({"value": 1}), &json!({"value": "1"})));
}

#[test]
fn test_decimals_compare_exactly() {
    let long = parse(r#"{"value": 0.12345678901234567890123456789012}"#).unwrap();
    let rounded = parse(r#"{"value": 0.1234567890123456789012345679}"#).unwrap();
    let diffs = json_diff(&long, &rounded);
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].path, "$.value");

    assert!(semantically_equal(
        &parse(r#"{"value": 1.5e3}"#).unwrap(),
        &parse(r#"{"value": 1500}"#).unwrap()
    ));
    assert!(semantically_equal(
        &parse(r#"{"value": -0.0}"#).unwrap(),
        &parse(r#"{"value": 0}"#).unwrap()
    ));
    assert!(!semantically_equal(
        &parse(r#"{"value": -1.25}"#).unwrap(),
        &parse(r#"{"value": 1.25}"#).unwrap()
    ));
}

#[test]
fn test_array_order_is_significant() {
    let diffs = json_diff(
        &json!({"given": ["Peter", "James"]}),
        &json!({"given": ["James", "Peter"]}),
    );
    assert_eq!(diffs.len(), 2);
    assert_eq!(diffs[0].path, "$.given[0]");
}

#[test]
fn test_reports_missing_and_unexpected_keys() {
    let diffs = json_diff(
        &json!({"id": "a", "name": [{"family": "Chalmers"}]}),
        &json!({"id": "a", "name": [{"text": "Chalmers"}]}),
    );
    assert_eq!(diffs.len(), 2);
    assert!(diffs
        .iter()
        .any(|d| d.path == "$.name[0].family" && matches!(d.kind, DifferenceKind::Missing(_))));
    assert!(diffs
        .iter()
        .any(|d| d.path == "$.name[0].text" && matches!(d.kind, DifferenceKind::Unexpected(_))));
}

#[test]
fn test_reports_length_mismatch() {
    let diffs = json_diff(&json!([1, 2, 3]), &json!([1, 2]));
    assert_eq!(
        diffs[0].kind,
        DifferenceKind::Length {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(diffs[0].to_string(), "$: expected 3 array items, got 2");
}

#[test]
fn test_parse_resource_reads_resource_type() {
    let (value, resource_type) =
        parse_resource(r#"{"resourceType": "Group", "id": "101"}"#).unwrap();
    assert_eq!(resource_type, "Group");
    assert_eq!(value["id"], "101");

    assert!(matches!(
        resource_type_of(&json!({"id": "x"})),
        Err(FormatError::MissingResourceType)
    ));
    assert!(matches!(resource_type_of(&json!([])), Err(FormatError::ExpectedObject)));
    assert!(matches!(parse("{"), Err(FormatError::Json(_))));
}

#[test]
fn test_pretty_string_round_trips() {
    let value = json!({"resourceType": "Patient", "name": [{"given": ["Peter"]}]});
    let text = to_pretty_string(&value).unwrap();
    assert!(text.contains("\n  \"name\""));
    assert!(semantically_equal(&value, &parse(&text).unwrap()));
}
