//! JSON codec for the FHIR model
//!
//! Decoding walks a `serde_json::Value` tree with an [`ObjectReader`] per
//! object; encoding builds the tree back with an [`ObjectWriter`]. Model types
//! describe their fields through [`ComplexType`], choice elements through
//! [`Choice`].

mod field;
mod reader;
mod writer;

pub use field::{
    Field, FieldKind, TypeKind, BACKBONE_ELEMENT_FIELDS, DOMAIN_RESOURCE_FIELDS, ELEMENT_FIELDS,
    RESOURCE_FIELDS,
};
pub use reader::ObjectReader;
pub use writer::ObjectWriter;

use crate::error::{Error, Result};
use crate::r4::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, debug_span, trace, warn};

/// Decoder behaviour for input that is not strictly valid FHIR JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Fail on keys the model does not know (otherwise they are logged and dropped)
    pub deny_unknown_fields: bool,
    /// Treat `null` values, empty arrays and empty objects as absent instead of failing
    pub allow_null_and_empty: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            deny_unknown_fields: true,
            allow_null_and_empty: false,
        }
    }
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            deny_unknown_fields: false,
            allow_null_and_empty: true,
        }
    }
}

/// A FHIR complex type, backbone element or resource with a fixed field table.
pub trait ComplexType: Sized {
    /// FHIR type name (`HumanName`, `Patient`, `Patient.contact`)
    const TYPE_NAME: &'static str;
    const TYPE_KIND: TypeKind;
    /// Fields declared by this type, inherited base fields excluded
    const FIELDS: &'static [Field];

    fn decode_fields(reader: &mut ObjectReader<'_>) -> Result<Self>;

    fn encode_fields(&self, writer: &mut ObjectWriter);

    /// Look up a field, inherited ones included, by its JSON name.
    fn field_descriptor(name: &str) -> Option<&'static Field> {
        Self::TYPE_KIND
            .base_fields()
            .iter()
            .chain(Self::FIELDS)
            .find(|field| field.name == name)
    }
}

/// A value that maps to one JSON object: any [`ComplexType`] or a [`Resource`].
pub trait JsonModel: Sized {
    const FIELD_KIND: FieldKind;

    /// Root of the error paths when this value is the document.
    fn root_path(value: &Value) -> String;

    fn decode_json(value: &Value, path: String, options: DecodeOptions) -> Result<Self>;

    fn encode_json(&self) -> Map<String, Value>;
}

impl<T: ComplexType> JsonModel for T {
    const FIELD_KIND: FieldKind = if T::TYPE_KIND.is_resource() {
        FieldKind::Resource
    } else {
        FieldKind::Complex
    };

    fn root_path(_value: &Value) -> String {
        T::TYPE_NAME.to_string()
    }

    fn decode_json(value: &Value, path: String, options: DecodeOptions) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::InvalidType {
            path: path.clone(),
            expected: "object",
            found: json_kind(value),
        })?;
        trace!(path = %path, type_name = T::TYPE_NAME, "decoding");
        let mut reader = ObjectReader::new(object, path, options);
        if T::TYPE_KIND.is_resource() {
            reader.expect_resource_type(T::TYPE_NAME)?;
        }
        let decoded = T::decode_fields(&mut reader)?;
        reader.finish(&[T::TYPE_KIND.base_fields(), T::FIELDS])?;
        Ok(decoded)
    }

    fn encode_json(&self) -> Map<String, Value> {
        let mut writer = if T::TYPE_KIND.is_resource() {
            ObjectWriter::for_resource(T::TYPE_NAME)
        } else {
            ObjectWriter::new()
        };
        self.encode_fields(&mut writer);
        writer.finish()
    }
}

/// How a Rust type is read from and written to its key in a parent object.
pub trait FieldCodec: Sized {
    const FIELD_KIND: FieldKind;

    fn decode_field(reader: &mut ObjectReader<'_>, key: &str) -> Result<Option<Self>>;

    fn decode_repeated(reader: &mut ObjectReader<'_>, key: &str) -> Result<Vec<Self>>;

    fn encode_field(&self, writer: &mut ObjectWriter, key: &str);

    fn encode_repeated(items: &[Self], writer: &mut ObjectWriter, key: &str);
}

impl<T: JsonModel> FieldCodec for T {
    const FIELD_KIND: FieldKind = <T as JsonModel>::FIELD_KIND;

    fn decode_field(reader: &mut ObjectReader<'_>, key: &str) -> Result<Option<Self>> {
        Ok(reader.decode_value_with(key, decode_non_empty::<T>)?.flatten())
    }

    fn decode_repeated(reader: &mut ObjectReader<'_>, key: &str) -> Result<Vec<Self>> {
        let items = reader.decode_array_with(key, decode_non_empty::<T>)?;
        Ok(items.into_iter().flatten().collect())
    }

    fn encode_field(&self, writer: &mut ObjectWriter, key: &str) {
        writer.insert_object(key, self.encode_json());
    }

    fn encode_repeated(items: &[Self], writer: &mut ObjectWriter, key: &str) {
        let items = items
            .iter()
            .map(JsonModel::encode_json)
            .filter(|object| !object.is_empty())
            .map(Value::Object)
            .collect();
        writer.insert_array(key, items);
    }
}

/// An element with no keys carries nothing and would vanish on encode, so it is
/// rejected, or dropped in lenient mode.
fn decode_non_empty<T: JsonModel>(
    value: &Value,
    path: String,
    options: DecodeOptions,
) -> Result<Option<T>> {
    if value.as_object().is_some_and(Map::is_empty) {
        if options.allow_null_and_empty {
            warn!(path = %path, "ignoring empty object");
            return Ok(None);
        }
        return Err(Error::InvalidType {
            path,
            expected: "non-empty object",
            found: "empty object",
        });
    }
    T::decode_json(value, path, options).map(Some)
}

/// Plain strings: element ids and extension urls, which never carry `_` metadata.
impl FieldCodec for String {
    const FIELD_KIND: FieldKind = FieldKind::Primitive;

    fn decode_field(reader: &mut ObjectReader<'_>, key: &str) -> Result<Option<Self>> {
        reader.decode_value_with(key, decode_string)
    }

    fn decode_repeated(reader: &mut ObjectReader<'_>, key: &str) -> Result<Vec<Self>> {
        reader.decode_array_with(key, decode_string)
    }

    fn encode_field(&self, writer: &mut ObjectWriter, key: &str) {
        writer.insert(key, Value::String(self.clone()));
    }

    fn encode_repeated(items: &[Self], writer: &mut ObjectWriter, key: &str) {
        writer.insert_array(key, items.iter().cloned().map(Value::String).collect());
    }
}

fn decode_string(value: &Value, path: String, _options: DecodeOptions) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidType {
            path,
            expected: "string",
            found: json_kind(value),
        })
}

/// A closed set of types for a `name[x]` element.
pub trait Choice: Sized {
    /// Allowed type suffixes, e.g. `["Quantity", "String"]`
    const SUFFIXES: &'static [&'static str];

    /// Decode the variant for `suffix`, stored under `key` (= name + suffix).
    fn decode_variant(reader: &mut ObjectReader<'_>, key: &str, suffix: &str)
        -> Result<Option<Self>>;

    fn encode_variant(&self, writer: &mut ObjectWriter, name: &str);
}

/// JSON kind name for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Entry point for converting between FHIR JSON and model values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    options: DecodeOptions,
}

impl JsonCodec {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn decode<T: JsonModel>(&self, input: &str) -> Result<T> {
        let value: Value = serde_json::from_str(input)?;
        self.decode_value(&value)
    }

    pub fn decode_value<T: JsonModel>(&self, value: &Value) -> Result<T> {
        let root = T::root_path(value);
        let _span = debug_span!("decode", root = %root).entered();
        let decoded = T::decode_json(value, root, self.options)?;
        let id = value.get("id").and_then(|id| id.as_str()).unwrap_or_default();
        debug!(id, "decoded");
        Ok(decoded)
    }

    /// Decode any supported resource, selected by its `resourceType`.
    pub fn decode_resource(&self, input: &str) -> Result<Resource> {
        self.decode(input)
    }

    pub fn encode<T: JsonModel>(&self, value: &T) -> Value {
        let object = value.encode_json();
        let resource_type = object
            .get("resourceType")
            .and_then(|rt| rt.as_str())
            .unwrap_or_default();
        debug!(resource_type, keys = object.len(), "encoded");
        Value::Object(object)
    }

    pub fn encode_string<T: JsonModel>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(value))?)
    }

    pub fn encode_string_pretty<T: JsonModel>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode(value))?)
    }
}

/// Decode JSON text with strict options.
pub fn from_str<T: JsonModel>(input: &str) -> Result<T> {
    JsonCodec::default().decode(input)
}

pub fn from_value<T: JsonModel>(value: &Value) -> Result<T> {
    JsonCodec::default().decode_value(value)
}

pub fn to_value<T: JsonModel>(value: &T) -> Value {
    JsonCodec::default().encode(value)
}

pub fn to_string<T: JsonModel>(value: &T) -> Result<String> {
    JsonCodec::default().encode_string(value)
}

/// `Serialize` body shared by every model type.
pub fn serialize_model<T: JsonModel, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    Value::Object(value.encode_json()).serialize(serializer)
}

/// `Deserialize` body shared by every model type; decodes strictly.
pub fn deserialize_model<'de, T: JsonModel, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<T, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let root = T::root_path(&value);
    T::decode_json(&value, root, DecodeOptions::default()).map_err(serde::de::Error::custom)
}
