//! Decoding side of the codec

use super::field::Field;
use super::{json_kind, Choice, DecodeOptions, FieldCodec};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

/// Reads the fields of one JSON object, tracking which keys were consumed.
///
/// Model types pull their fields out one by one; [`ObjectReader::finish`] then
/// reports every key nobody asked for.
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    path: String,
    options: DecodeOptions,
    consumed: HashSet<&'a str>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(
        object: &'a Map<String, Value>,
        path: impl Into<String>,
        options: DecodeOptions,
    ) -> Self {
        Self {
            object,
            path: path.into(),
            options,
            consumed: HashSet::new(),
        }
    }

    /// A reader for an object nested below this one, sharing the options.
    pub fn nested<'b>(&self, object: &'b Map<String, Value>, path: String) -> ObjectReader<'b> {
        ObjectReader::new(object, path, self.options)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn child_path(&self, key: &str) -> String {
        format!("{}.{}", self.path, key)
    }

    /// Mark `key` consumed and return its raw value.
    pub fn take(&mut self, key: &str) -> Option<&'a Value> {
        let (key, value) = self.object.get_key_value(key)?;
        self.consumed.insert(key.as_str());
        Some(value)
    }

    /// Like [`take`](Self::take), treating `null` as absent in lenient mode.
    pub fn take_present(&mut self, key: &str) -> Result<Option<&'a Value>> {
        match self.take(key) {
            Some(Value::Null) => {
                if self.options.allow_null_and_empty {
                    warn!(path = %self.child_path(key), "ignoring null value");
                    Ok(None)
                } else {
                    Err(Error::InvalidType {
                        path: self.child_path(key),
                        expected: "a value",
                        found: "null",
                    })
                }
            }
            other => Ok(other),
        }
    }

    /// Take an array-valued key. Empty arrays are absent in lenient mode.
    pub fn take_array(&mut self, key: &str) -> Result<Option<&'a [Value]>> {
        let Some(value) = self.take_present(key)? else {
            return Ok(None);
        };
        let Value::Array(items) = value else {
            return Err(Error::InvalidType {
                path: self.child_path(key),
                expected: "array",
                found: json_kind(value),
            });
        };
        if items.is_empty() {
            if self.options.allow_null_and_empty {
                warn!(path = %self.child_path(key), "ignoring empty array");
                return Ok(None);
            }
            return Err(Error::InvalidType {
                path: self.child_path(key),
                expected: "non-empty array",
                found: "empty array",
            });
        }
        Ok(Some(items.as_slice()))
    }

    /// Decode a single JSON value stored under `key` with `decode`.
    pub fn decode_value_with<T>(
        &mut self,
        key: &str,
        decode: impl FnOnce(&'a Value, String, DecodeOptions) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.take_present(key)? {
            Some(value) => decode(value, self.child_path(key), self.options).map(Some),
            None => Ok(None),
        }
    }

    /// Decode every item of the array stored under `key` with `decode`.
    pub fn decode_array_with<T>(
        &mut self,
        key: &str,
        decode: impl Fn(&'a Value, String, DecodeOptions) -> Result<T>,
    ) -> Result<Vec<T>> {
        let Some(items) = self.take_array(key)? else {
            return Ok(Vec::new());
        };
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let path = format!("{}[{}]", self.child_path(key), idx);
            if item.is_null() {
                if self.options.allow_null_and_empty {
                    warn!(path = %path, "ignoring null array item");
                    continue;
                }
                return Err(Error::InvalidType {
                    path,
                    expected: "a value",
                    found: "null",
                });
            }
            out.push(decode(item, path, self.options)?);
        }
        Ok(out)
    }

    pub fn optional<T: FieldCodec>(&mut self, key: &str) -> Result<Option<T>> {
        T::decode_field(self, key)
    }

    /// Optional field held behind a `Box` to break a type cycle.
    pub fn optional_boxed<T: FieldCodec>(&mut self, key: &str) -> Result<Option<Box<T>>> {
        Ok(T::decode_field(self, key)?.map(Box::new))
    }

    pub fn required<T: FieldCodec>(&mut self, key: &str) -> Result<T> {
        T::decode_field(self, key)?.ok_or_else(|| Error::MissingField {
            path: self.child_path(key),
        })
    }

    pub fn repeated<T: FieldCodec>(&mut self, key: &str) -> Result<Vec<T>> {
        T::decode_repeated(self, key)
    }

    pub fn required_repeated<T: FieldCodec>(&mut self, key: &str) -> Result<Vec<T>> {
        let items = T::decode_repeated(self, key)?;
        if items.is_empty() {
            return Err(Error::MissingField {
                path: self.child_path(key),
            });
        }
        Ok(items)
    }

    /// Decode the choice element `name[x]`.
    ///
    /// Exactly one `name<Suffix>` (or its `_name<Suffix>` metadata) may be
    /// present; more than one is [`Error::AmbiguousChoice`].
    pub fn choice<C: Choice>(&mut self, name: &str) -> Result<Option<C>> {
        let mut found: Vec<(String, &'static str)> = Vec::new();
        for suffix in C::SUFFIXES {
            let key = format!("{}{}", name, suffix);
            if self.object.contains_key(&key) || self.object.contains_key(&format!("_{}", key)) {
                found.push((key, *suffix));
            }
        }
        match found.len() {
            0 => Ok(None),
            1 => {
                let (key, suffix) = found.remove(0);
                C::decode_variant(self, &key, suffix)
            }
            _ => Err(Error::AmbiguousChoice {
                path: self.child_path(&format!("{}[x]", name)),
                keys: found.into_iter().map(|(key, _)| key).collect(),
            }),
        }
    }

    pub fn required_choice<C: Choice>(&mut self, name: &str) -> Result<C> {
        self.choice(name)?.ok_or_else(|| Error::MissingField {
            path: self.child_path(&format!("{}[x]", name)),
        })
    }

    /// Check `resourceType` against the expected type name.
    pub fn expect_resource_type(&mut self, expected: &'static str) -> Result<()> {
        let found = self.resource_type()?;
        if found != expected {
            return Err(Error::ResourceTypeMismatch {
                path: self.path.clone(),
                expected,
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Consume and return the `resourceType` discriminator.
    pub fn resource_type(&mut self) -> Result<&'a str> {
        let value = self.take("resourceType").ok_or_else(|| Error::MissingField {
            path: self.child_path("resourceType"),
        })?;
        value.as_str().ok_or_else(|| Error::InvalidType {
            path: self.child_path("resourceType"),
            expected: "string",
            found: json_kind(value),
        })
    }

    /// Reject (or in lenient mode drop) every key that was not consumed.
    pub fn finish(self, tables: &[&[Field]]) -> Result<()> {
        for key in self.object.keys() {
            if self.consumed.contains(key.as_str()) {
                continue;
            }
            let error = self.classify(key, tables);
            if self.options.deny_unknown_fields {
                return Err(error);
            }
            warn!(path = %self.path, key = %key, "dropping unrecognized key: {}", error);
        }
        Ok(())
    }

    fn classify(&self, key: &str, tables: &[&[Field]]) -> Error {
        let choice = tables
            .iter()
            .flat_map(|table| table.iter())
            .find(|field| field.is_choice_near_miss(key));
        match choice {
            Some(field) => Error::UnknownChoiceType {
                path: self.child_path(&format!("{}[x]", field.name)),
                key: key.to_string(),
            },
            None => Error::UnknownField {
                path: self.child_path(key),
            },
        }
    }
}
