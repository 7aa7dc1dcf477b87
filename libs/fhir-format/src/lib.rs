//! FHIR JSON text helpers.
//!
//! The comparison rules follow what FHIR considers the "same" JSON document:
//! - Object key order is irrelevant.
//! - Array order is significant.
//! - Numbers compare by exact decimal value, so `185` and `185.0` are equal.
//! - No extra or missing keys are tolerated.

use serde_json::{Map, Number, Value};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected a JSON object for the resource")]
    ExpectedObject,
    #[error("missing resourceType property")]
    MissingResourceType,
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse JSON text into a tree.
pub fn parse(input: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse JSON text that must hold a resource, returning the tree and its `resourceType`.
pub fn parse_resource(input: &str) -> Result<(Value, String), FormatError> {
    let value = parse(input)?;
    let resource_type = resource_type_of(&value)?.to_string();
    Ok((value, resource_type))
}

/// Read the `resourceType` discriminator of a resource object.
pub fn resource_type_of(value: &Value) -> Result<&str, FormatError> {
    value
        .as_object()
        .ok_or(FormatError::ExpectedObject)?
        .get("resourceType")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingResourceType)
}

/// Serialize with two-space indentation.
pub fn to_pretty_string(value: &Value) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A single place where two JSON documents disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDifference {
    /// JSON path of the difference, e.g. `$.name[0].given[1]`
    pub path: String,
    pub kind: DifferenceKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    /// Key exists in the expected document only
    Missing(Value),
    /// Key exists in the actual document only
    Unexpected(Value),
    /// Arrays differ in length
    Length { expected: usize, actual: usize },
    /// Values of different JSON kind or different scalar values
    Value { expected: Value, actual: Value },
}

impl fmt::Display for JsonDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DifferenceKind::Missing(v) => write!(f, "{}: missing, expected {}", self.path, v),
            DifferenceKind::Unexpected(v) => write!(f, "{}: unexpected {}", self.path, v),
            DifferenceKind::Length { expected, actual } => write!(
                f,
                "{}: expected {} array items, got {}",
                self.path, expected, actual
            ),
            DifferenceKind::Value { expected, actual } => {
                write!(f, "{}: expected {}, got {}", self.path, expected, actual)
            }
        }
    }
}

/// Compare two documents and report every difference.
pub fn json_diff(expected: &Value, actual: &Value) -> Vec<JsonDifference> {
    let mut out = Vec::new();
    diff_value("$", expected, actual, &mut out);
    out
}

/// True when the documents are semantically the same.
pub fn semantically_equal(expected: &Value, actual: &Value) -> bool {
    json_diff(expected, actual).is_empty()
}

fn diff_value(path: &str, expected: &Value, actual: &Value, out: &mut Vec<JsonDifference>) {
    match (expected, actual) {
        (Value::Object(e), Value::Object(a)) => diff_object(path, e, a, out),
        (Value::Array(e), Value::Array(a)) => {
            if e.len() != a.len() {
                out.push(JsonDifference {
                    path: path.to_string(),
                    kind: DifferenceKind::Length {
                        expected: e.len(),
                        actual: a.len(),
                    },
                });
            }
            for (idx, (ev, av)) in e.iter().zip(a.iter()).enumerate() {
                diff_value(&format!("{}[{}]", path, idx), ev, av, out);
            }
        }
        (Value::Number(e), Value::Number(a)) => {
            if !numbers_equal(e, a) {
                out.push(value_difference(path, expected, actual));
            }
        }
        _ => {
            if expected != actual {
                out.push(value_difference(path, expected, actual));
            }
        }
    }
}

fn diff_object(
    path: &str,
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    out: &mut Vec<JsonDifference>,
) {
    for (key, ev) in expected {
        let child = format!("{}.{}", path, key);
        match actual.get(key) {
            Some(av) => diff_value(&child, ev, av, out),
            None => out.push(JsonDifference {
                path: child,
                kind: DifferenceKind::Missing(ev.clone()),
            }),
        }
    }
    for (key, av) in actual {
        if !expected.contains_key(key) {
            out.push(JsonDifference {
                path: format!("{}.{}", path, key),
                kind: DifferenceKind::Unexpected(av.clone()),
            });
        }
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (decimal_parts(&a.to_string()), decimal_parts(&b.to_string())) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Exact value of a JSON number as (negative, digits, exponent) with the
/// digits stripped of leading and trailing zeros. Zero is `(false, "", 0)`.
fn decimal_parts(text: &str) -> Option<(bool, String, i64)> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (coefficient, exponent) = match unsigned.split_once(|c: char| matches!(c, 'e' | 'E')) {
        Some((coefficient, exponent)) => (coefficient, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (integer, fraction) = coefficient.split_once('.').unwrap_or((coefficient, ""));
    let digits = format!("{}{}", integer, fraction);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some((false, String::new(), 0));
    }
    let significant = trimmed.trim_end_matches('0');
    let trailing_zeros = (trimmed.len() - significant.len()) as i64;
    let exponent = exponent - fraction.len() as i64 + trailing_zeros;
    Some((negative, significant.to_string(), exponent))
}

fn value_difference(path: &str, expected: &Value, actual: &Value) -> JsonDifference {
    JsonDifference {
        path: path.to_string(),
        kind: DifferenceKind::Value {
            expected: expected.clone(),
            actual: actual.clone(),
        },
    }
}
