//! Polymorphic resource container
//!
//! `contained` resources and Bundle entries may hold any resource type; the
//! [`Resource`] enum selects the concrete type from `resourceType`.

use crate::codec::{json_kind, ComplexType, DecodeOptions, FieldKind, JsonModel};
use crate::error::{Error, Result};
use crate::primitive::StringField;
use crate::r4::{
    AllergyIntolerance, Appointment, Bundle, Condition, Group, Medication, MedicationStatement,
    Meta, Observation, Organization, Patient, Practitioner, RelatedPerson,
};
use serde_json::{Map, Value};

/// A concrete resource type.
pub trait ResourceType: ComplexType + Into<Resource> {
    fn id(&self) -> Option<&str>;

    fn meta(&self) -> Option<&Meta>;

    fn from_resource(resource: Resource) -> Option<Self>;

    fn from_resource_ref(resource: &Resource) -> Option<&Self>;
}

macro_rules! resources {
    ($($variant:ident),* $(,)?) => {
        /// Any resource type supported by the model.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $variant(Box<$variant>), )*
        }

        /// `resourceType` values [`Resource`] can decode.
        pub const RESOURCE_TYPES: &[&str] = &[$(stringify!($variant)),*];

        impl Resource {
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $( Resource::$variant(_) => stringify!($variant), )*
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $( Resource::$variant(resource) => resource.id.as_str(), )*
                }
            }

            pub fn meta(&self) -> Option<&Meta> {
                match self {
                    $( Resource::$variant(resource) => resource.meta.as_ref(), )*
                }
            }

            fn decode_as(
                resource_type: &str,
                value: &Value,
                path: String,
                options: DecodeOptions,
            ) -> Result<Self> {
                match resource_type {
                    $(
                        stringify!($variant) => {
                            <$variant as JsonModel>::decode_json(value, path, options).map(Resource::from)
                        }
                    )*
                    other => Err(Error::UnknownResourceType {
                        path,
                        resource_type: other.to_string(),
                    }),
                }
            }

            fn encode_variant(&self) -> Map<String, Value> {
                match self {
                    $( Resource::$variant(resource) => resource.encode_json(), )*
                }
            }
        }

        $(
            impl From<$variant> for Resource {
                fn from(resource: $variant) -> Self {
                    Resource::$variant(Box::new(resource))
                }
            }

            impl ResourceType for $variant {
                fn id(&self) -> Option<&str> {
                    self.id.as_str()
                }

                fn meta(&self) -> Option<&Meta> {
                    self.meta.as_ref()
                }

                fn from_resource(resource: Resource) -> Option<Self> {
                    match resource {
                        Resource::$variant(resource) => Some(*resource),
                        _ => None,
                    }
                }

                fn from_resource_ref(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$variant(resource) => Some(resource),
                        _ => None,
                    }
                }
            }
        )*
    };
}

resources! {
    AllergyIntolerance,
    Appointment,
    Bundle,
    Condition,
    Group,
    Medication,
    MedicationStatement,
    Observation,
    Organization,
    Patient,
    Practitioner,
    RelatedPerson,
}

impl Resource {
    /// Borrow the resource as `T` when it holds that type.
    pub fn downcast_ref<T: ResourceType>(&self) -> Option<&T> {
        T::from_resource_ref(self)
    }

    pub fn downcast<T: ResourceType>(self) -> Option<T> {
        T::from_resource(self)
    }
}

impl JsonModel for Resource {
    const FIELD_KIND: FieldKind = FieldKind::Resource;

    fn root_path(value: &Value) -> String {
        value
            .get("resourceType")
            .and_then(Value::as_str)
            .unwrap_or("Resource")
            .to_string()
    }

    fn decode_json(value: &Value, path: String, options: DecodeOptions) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::InvalidType {
            path: path.clone(),
            expected: "object",
            found: json_kind(value),
        })?;
        let resource_type = match object.get("resourceType") {
            Some(Value::String(resource_type)) => resource_type.as_str(),
            Some(other) => {
                return Err(Error::InvalidType {
                    path: format!("{}.resourceType", path),
                    expected: "string",
                    found: json_kind(other),
                })
            }
            None => {
                return Err(Error::MissingField {
                    path: format!("{}.resourceType", path),
                })
            }
        };
        Resource::decode_as(resource_type, value, path, options)
    }

    fn encode_json(&self) -> Map<String, Value> {
        self.encode_variant()
    }
}

impl serde::Serialize for Resource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        crate::codec::serialize_model(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        crate::codec::deserialize_model(deserializer)
    }
}
