//! Primitive-with-extension values
//!
//! Every FHIR primitive can carry an element id and extensions next to its
//! value. In JSON the value lives under `field` and the metadata under
//! `_field`; in the model both live in one [`Primitive`].

mod temporal;

pub use temporal::{Date, DateTime, Instant, ParseTemporalError, Time, Timestamp, Timezone};

use crate::codec::{json_kind, FieldCodec, FieldKind, ObjectReader, ObjectWriter, ELEMENT_FIELDS};
use crate::error::{Error, Result};
use crate::r4::Extension;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::str::FromStr;
use tracing::warn;

/// A primitive value together with its element id and extensions.
///
/// Any part may be missing: `{"_birthDate": {"extension": [...]}}` decodes to a
/// `Primitive` with no value and one extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T> {
    pub id: Option<String>,
    pub extension: Vec<Extension>,
    pub value: Option<T>,
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<T> Primitive<T> {
    pub fn new(value: T) -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            value: Some(value),
        }
    }

    /// Attach an extension, consuming and returning `self`.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    /// True when an id or extensions are present (the `_field` part).
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_metadata()
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Primitive::new(value)
    }
}

impl From<&str> for Primitive<String> {
    fn from(value: &str) -> Self {
        Primitive::new(value.to_string())
    }
}

impl PartialEq<str> for Primitive<String> {
    fn eq(&self, other: &str) -> bool {
        self.value.as_deref() == Some(other)
    }
}

impl PartialEq<&str> for Primitive<String> {
    fn eq(&self, other: &&str) -> bool {
        self.value.as_deref() == Some(*other)
    }
}

impl PartialEq<String> for Primitive<String> {
    fn eq(&self, other: &String) -> bool {
        self.value.as_ref() == Some(other)
    }
}

macro_rules! primitive_eq {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Primitive<$ty> {
                fn eq(&self, other: &$ty) -> bool {
                    self.value.as_ref() == Some(other)
                }
            }
        )*
    };
}

primitive_eq!(bool, i32, u32, Decimal, Date, DateTime, Instant, Time);

/// Read access to the value of a primitive field, present or not.
pub trait PrimitiveField<T> {
    fn value(&self) -> Option<&T>;
}

impl<T> PrimitiveField<T> for Primitive<T> {
    fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> PrimitiveField<T> for Option<Primitive<T>> {
    fn value(&self) -> Option<&T> {
        self.as_ref().and_then(|p| p.value.as_ref())
    }
}

/// `as_str` for string-valued primitive fields.
pub trait StringField {
    fn as_str(&self) -> Option<&str>;
}

impl<P: PrimitiveField<String>> StringField for P {
    fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

/// Why a JSON value was rejected as a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPrimitive {
    /// The JSON kind is wrong (e.g. a number where a string is required)
    WrongKind { expected: &'static str },
    /// The JSON kind is right but the content is not a valid lexical form
    Lexical,
}

/// A Rust type that can stand in for a FHIR primitive value.
pub trait PrimitiveValue: Sized {
    /// FHIR type name used in error messages
    const FHIR_TYPE: &'static str;

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive>;

    fn to_json(&self) -> Value;
}

impl PrimitiveValue for bool {
    const FHIR_TYPE: &'static str = "boolean";

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
        value
            .as_bool()
            .ok_or(InvalidPrimitive::WrongKind { expected: "boolean" })
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl PrimitiveValue for i32 {
    const FHIR_TYPE: &'static str = "integer";

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
        if !value.is_number() {
            return Err(InvalidPrimitive::WrongKind { expected: "number" });
        }
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(InvalidPrimitive::Lexical)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for u32 {
    const FHIR_TYPE: &'static str = "unsignedInt";

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
        if !value.is_number() {
            return Err(InvalidPrimitive::WrongKind { expected: "number" });
        }
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(InvalidPrimitive::Lexical)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for Decimal {
    const FHIR_TYPE: &'static str = "decimal";

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
        let Value::Number(n) = value else {
            return Err(InvalidPrimitive::WrongKind { expected: "number" });
        };
        let text = n.to_string();
        let decimal = Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| InvalidPrimitive::Lexical)?;
        // Decimal holds 28 digits; anything it had to round is rejected.
        if same_digits(&text, &decimal.to_string()) {
            Ok(decimal)
        } else {
            Err(InvalidPrimitive::Lexical)
        }
    }

    fn to_json(&self) -> Value {
        let text = self.to_string();
        match text.parse::<Number>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::String(text),
        }
    }
}

/// Compare a JSON number's text with a printed `Decimal`, ignoring a sign on zero.
/// Exponent forms only need the same significant digits.
fn same_digits(input: &str, decimal: &str) -> bool {
    match input.find(|c: char| matches!(c, 'e' | 'E')) {
        None => input.trim_start_matches('-') == decimal.trim_start_matches('-'),
        Some(idx) => significant(&input[..idx]) == significant(decimal),
    }
}

fn significant(coefficient: &str) -> String {
    let digits: String = coefficient.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').to_string()
}

impl PrimitiveValue for String {
    const FHIR_TYPE: &'static str = "string";

    fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or(InvalidPrimitive::WrongKind { expected: "string" })
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! lexical_primitive {
    ($($ty:ty => $fhir:literal),* $(,)?) => {
        $(
            impl PrimitiveValue for $ty {
                const FHIR_TYPE: &'static str = $fhir;

                fn from_json(value: &Value) -> std::result::Result<Self, InvalidPrimitive> {
                    value
                        .as_str()
                        .ok_or(InvalidPrimitive::WrongKind { expected: "string" })?
                        .parse()
                        .map_err(|_| InvalidPrimitive::Lexical)
                }

                fn to_json(&self) -> Value {
                    Value::String(self.to_string())
                }
            }
        )*
    };
}

lexical_primitive! {
    Date => "date",
    DateTime => "dateTime",
    Instant => "instant",
    Time => "time",
}

impl<T: PrimitiveValue> Primitive<T> {
    /// Build a primitive from its `field` and `_field` JSON parts.
    fn from_parts(
        value: Option<&Value>,
        metadata: Option<&Value>,
        path: &str,
        meta_path: String,
        reader: &ObjectReader<'_>,
    ) -> Result<Self> {
        let value = match value {
            Some(v) => Some(T::from_json(v).map_err(|err| match err {
                InvalidPrimitive::WrongKind { expected } => Error::InvalidType {
                    path: path.to_string(),
                    expected,
                    found: json_kind(v),
                },
                InvalidPrimitive::Lexical => Error::InvalidValue {
                    path: path.to_string(),
                    type_name: T::FHIR_TYPE,
                    value: v.as_str().map_or_else(|| v.to_string(), str::to_string),
                },
            })?),
            None => None,
        };

        let (id, extension) = match metadata {
            Some(meta) => {
                let object = meta.as_object().ok_or_else(|| Error::InvalidType {
                    path: meta_path.clone(),
                    expected: "object",
                    found: json_kind(meta),
                })?;
                if object.is_empty() {
                    if !reader.options().allow_null_and_empty {
                        return Err(Error::InvalidType {
                            path: meta_path,
                            expected: "non-empty object",
                            found: "empty object",
                        });
                    }
                    warn!(path = %meta_path, "ignoring empty metadata object");
                    (None, Vec::new())
                } else {
                    let mut meta_reader = reader.nested(object, meta_path);
                    let id = meta_reader.optional::<String>("id")?;
                    let extension = meta_reader.repeated::<Extension>("extension")?;
                    meta_reader.finish(&[ELEMENT_FIELDS])?;
                    (id, extension)
                }
            }
            None => (None, Vec::new()),
        };

        Ok(Primitive {
            id,
            extension,
            value,
        })
    }

    fn metadata_json(&self) -> Value {
        let mut meta = ObjectWriter::new();
        meta.optional("id", &self.id);
        meta.repeated("extension", &self.extension);
        meta.into_value()
    }
}

impl<T: PrimitiveValue> FieldCodec for Primitive<T> {
    const FIELD_KIND: FieldKind = FieldKind::Primitive;

    fn decode_field(reader: &mut ObjectReader<'_>, key: &str) -> Result<Option<Self>> {
        let meta_key = format!("_{}", key);
        let value = reader.take_present(key)?;
        let metadata = reader.take_present(&meta_key)?;
        if value.is_none() && metadata.is_none() {
            return Ok(None);
        }
        let path = reader.child_path(key);
        let meta_path = reader.child_path(&meta_key);
        Self::from_parts(value, metadata, &path, meta_path, reader).map(Some)
    }

    fn decode_repeated(reader: &mut ObjectReader<'_>, key: &str) -> Result<Vec<Self>> {
        let meta_key = format!("_{}", key);
        let values = reader.take_array(key)?;
        let metadata = reader.take_array(&meta_key)?;
        let len = match (values, metadata) {
            (Some(v), Some(m)) if v.len() != m.len() => {
                return Err(Error::MismatchedArrays {
                    path: reader.child_path(key),
                    values: v.len(),
                    metadata: m.len(),
                })
            }
            (Some(v), _) => v.len(),
            (None, Some(m)) => m.len(),
            (None, None) => return Ok(Vec::new()),
        };

        let path = reader.child_path(key);
        let meta_path = reader.child_path(&meta_key);
        (0..len)
            .map(|idx| {
                let value = values.and_then(|v| v.get(idx)).filter(|v| !v.is_null());
                let meta = metadata.and_then(|m| m.get(idx)).filter(|m| !m.is_null());
                let item_path = format!("{}[{}]", path, idx);
                if value.is_none() && meta.is_none() {
                    return Err(Error::InvalidType {
                        path: item_path,
                        expected: T::FHIR_TYPE,
                        found: "null",
                    });
                }
                let item_meta_path = format!("{}[{}]", meta_path, idx);
                Self::from_parts(value, meta, &item_path, item_meta_path, reader)
            })
            .collect()
    }

    fn encode_field(&self, writer: &mut ObjectWriter, key: &str) {
        if let Some(value) = &self.value {
            writer.insert(key, value.to_json());
        }
        if self.has_metadata() {
            writer.insert(format!("_{}", key), self.metadata_json());
        }
    }

    fn encode_repeated(items: &[Self], writer: &mut ObjectWriter, key: &str) {
        let items: Vec<&Self> = items.iter().filter(|p| !p.is_empty()).collect();
        if items.iter().any(|p| p.value.is_some()) {
            let values = items
                .iter()
                .map(|p| p.value.as_ref().map_or(Value::Null, T::to_json))
                .collect();
            writer.insert(key, Value::Array(values));
        }
        if items.iter().any(|p| p.has_metadata()) {
            let metadata = items
                .iter()
                .map(|p| {
                    if p.has_metadata() {
                        p.metadata_json()
                    } else {
                        Value::Null
                    }
                })
                .collect();
            writer.insert(format!("_{}", key), Value::Array(metadata));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decimal_keeps_scale() {
        let value: Value = serde_json::from_str("1.50").unwrap();
        let decimal = Decimal::from_json(&value).unwrap();
        assert_eq!(decimal.to_string(), "1.50");
        assert_eq!(decimal.to_json().to_string(), "1.50");
    }

    #[test]
    fn decimal_rejects_lost_digits() {
        let value: Value = serde_json::from_str("0.12345678901234567890123456789012").unwrap();
        assert_eq!(Decimal::from_json(&value), Err(InvalidPrimitive::Lexical));

        let value: Value = serde_json::from_str("-0.0").unwrap();
        assert!(Decimal::from_json(&value).is_ok());
        let value: Value = serde_json::from_str("1.5e3").unwrap();
        assert_eq!(Decimal::from_json(&value), Ok(Decimal::from(1500)));
    }

    #[test]
    fn integers_reject_fractions() {
        let value: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(i32::from_json(&value), Err(InvalidPrimitive::Lexical));
        assert_eq!(
            i32::from_json(&json!("2")),
            Err(InvalidPrimitive::WrongKind { expected: "number" })
        );
        assert_eq!(u32::from_json(&json!(-1)), Err(InvalidPrimitive::Lexical));
    }

    #[test]
    fn comparisons() {
        let name = Primitive::from("Chalmers");
        assert_eq!(name, "Chalmers");
        assert!(name != "Peter");
        assert_eq!(Primitive::new(true), true);

        let missing: Option<Primitive<String>> = None;
        assert_eq!(missing.as_str(), None);
        assert_eq!(Some(name).as_str(), Some("Chalmers"));
    }

    #[test]
    fn metadata_flags() {
        let empty: Primitive<bool> = Primitive::default();
        assert!(empty.is_empty());

        let with_id = Primitive::<bool> {
            id: Some("a1".into()),
            ..Default::default()
        };
        assert!(with_id.has_metadata());
        assert!(!with_id.is_empty());
    }
}
