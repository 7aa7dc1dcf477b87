//! Encoding side of the codec

use super::{Choice, FieldCodec};
use serde_json::{Map, Value};

/// Builds one JSON object. Absent values never produce a key.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose first key is `resourceType`.
    pub fn for_resource(resource_type: &str) -> Self {
        let mut writer = Self::new();
        writer.insert("resourceType", Value::String(resource_type.to_string()));
        writer
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.map.insert(key.into(), value);
    }

    /// Insert an object, skipping it when it has no keys.
    pub fn insert_object(&mut self, key: &str, object: Map<String, Value>) {
        if !object.is_empty() {
            self.map.insert(key.to_string(), Value::Object(object));
        }
    }

    /// Insert an array, skipping it when it has no items.
    pub fn insert_array(&mut self, key: &str, items: Vec<Value>) {
        if !items.is_empty() {
            self.map.insert(key.to_string(), Value::Array(items));
        }
    }

    pub fn optional<T: FieldCodec>(&mut self, key: &str, value: &Option<T>) {
        if let Some(value) = value {
            value.encode_field(self, key);
        }
    }

    pub fn optional_boxed<T: FieldCodec>(&mut self, key: &str, value: &Option<Box<T>>) {
        if let Some(value) = value {
            T::encode_field(value, self, key);
        }
    }

    pub fn required<T: FieldCodec>(&mut self, key: &str, value: &T) {
        value.encode_field(self, key);
    }

    pub fn repeated<T: FieldCodec>(&mut self, key: &str, items: &[T]) {
        if !items.is_empty() {
            T::encode_repeated(items, self, key);
        }
    }

    pub fn required_repeated<T: FieldCodec>(&mut self, key: &str, items: &[T]) {
        self.repeated(key, items);
    }

    pub fn choice<C: Choice>(&mut self, name: &str, value: &Option<C>) {
        if let Some(value) = value {
            value.encode_variant(self, name);
        }
    }

    pub fn required_choice<C: Choice>(&mut self, name: &str, value: &C) {
        value.encode_variant(self, name);
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn finish(self) -> Map<String, Value> {
        self.map
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}
