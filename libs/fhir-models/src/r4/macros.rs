//! Declarative builders for model types
//!
//! Each model type is declared once as a field list; the macros derive the
//! struct, its descriptor table and its codec implementation from it.

/// Declare a code system as a Rust enum usable as a primitive value.
macro_rules! fhir_code {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($system:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            pub const SYSTEM: &'static str = $system;
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )*
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownCode;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )*
                    _ => Err($crate::error::UnknownCode {
                        system: $system,
                        code: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::primitive::PrimitiveValue for $name {
            const FHIR_TYPE: &'static str = "code";

            fn from_json(
                value: &::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::primitive::InvalidPrimitive> {
                value
                    .as_str()
                    .ok_or($crate::primitive::InvalidPrimitive::WrongKind { expected: "string" })?
                    .parse()
                    .map_err(|_| $crate::primitive::InvalidPrimitive::Lexical)
            }

            fn to_json(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_str().to_string())
            }
        }

        impl PartialEq<$name> for $crate::primitive::Primitive<$name> {
            fn eq(&self, other: &$name) -> bool {
                self.value.as_ref() == Some(other)
            }
        }
    };
}

/// Declare the closed set of types of a `name[x]` element.
macro_rules! fhir_choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty) = $suffix:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )*
        }

        impl $crate::codec::Choice for $name {
            const SUFFIXES: &'static [&'static str] = &[$($suffix),*];

            fn decode_variant(
                reader: &mut $crate::codec::ObjectReader<'_>,
                key: &str,
                suffix: &str,
            ) -> $crate::error::Result<Option<Self>> {
                match suffix {
                    $(
                        $suffix => Ok(
                            <$ty as $crate::codec::FieldCodec>::decode_field(reader, key)?
                                .map($name::$variant),
                        ),
                    )*
                    _ => Ok(None),
                }
            }

            fn encode_variant(&self, writer: &mut $crate::codec::ObjectWriter, name: &str) {
                match self {
                    $(
                        $name::$variant(value) => $crate::codec::FieldCodec::encode_field(
                            value,
                            writer,
                            &format!("{}{}", name, $suffix),
                        ),
                    )*
                }
            }
        }
    };
}

/// Declare a complex type, backbone element or resource.
///
/// Fields are written `rust_name: mode Type = "jsonName"` where `mode` is one of
/// `optional`, `optional_boxed`, `required`, `repeated`, `required_repeated`,
/// `choice` or `required_choice`. Inherited base fields are added per kind.
macro_rules! fhir_type {
    (@ty optional $ty:ty) => { Option<$ty> };
    (@ty optional_boxed $ty:ty) => { Option<Box<$ty>> };
    (@ty required $ty:ty) => { $ty };
    (@ty repeated $ty:ty) => { Vec<$ty> };
    (@ty required_repeated $ty:ty) => { Vec<$ty> };
    (@ty choice $ty:ty) => { Option<$ty> };
    (@ty required_choice $ty:ty) => { $ty };

    (@field optional $ty:ty = $json:literal) => {
        $crate::codec::Field::new($json, <$ty as $crate::codec::FieldCodec>::FIELD_KIND)
    };
    (@field optional_boxed $ty:ty = $json:literal) => {
        $crate::codec::Field::new($json, <$ty as $crate::codec::FieldCodec>::FIELD_KIND)
    };
    (@field required $ty:ty = $json:literal) => {
        $crate::codec::Field::new($json, <$ty as $crate::codec::FieldCodec>::FIELD_KIND).required()
    };
    (@field repeated $ty:ty = $json:literal) => {
        $crate::codec::Field::new($json, <$ty as $crate::codec::FieldCodec>::FIELD_KIND).repeated()
    };
    (@field required_repeated $ty:ty = $json:literal) => {
        $crate::codec::Field::new($json, <$ty as $crate::codec::FieldCodec>::FIELD_KIND)
            .required()
            .repeated()
    };
    (@field choice $ty:ty = $json:literal) => {
        $crate::codec::Field::choice($json, <$ty as $crate::codec::Choice>::SUFFIXES)
    };
    (@field required_choice $ty:ty = $json:literal) => {
        $crate::codec::Field::choice($json, <$ty as $crate::codec::Choice>::SUFFIXES).required()
    };

    (
        @define
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:ident($type_name:literal)
        base {
            $( $(#[$bmeta:meta])* $bfield:ident : $bmode:ident $bty:ty = $bjson:literal ),* $(,)?
        }
        fields {
            $( $(#[$fmeta:meta])* $field:ident : $mode:ident $ty:ty = $json:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $(#[$bmeta])* pub $bfield: fhir_type!(@ty $bmode $bty), )*
            $( $(#[$fmeta])* pub $field: fhir_type!(@ty $mode $ty), )*
        }

        impl $crate::codec::ComplexType for $name {
            const TYPE_NAME: &'static str = $type_name;
            const TYPE_KIND: $crate::codec::TypeKind = $crate::codec::TypeKind::$kind;
            const FIELDS: &'static [$crate::codec::Field] = &[
                $( fhir_type!(@field $mode $ty = $json), )*
            ];

            fn decode_fields(
                reader: &mut $crate::codec::ObjectReader<'_>,
            ) -> $crate::error::Result<Self> {
                Ok(Self {
                    $( $bfield: reader.$bmode($bjson)?, )*
                    $( $field: reader.$mode($json)?, )*
                })
            }

            fn encode_fields(&self, writer: &mut $crate::codec::ObjectWriter) {
                $( writer.$bmode($bjson, &self.$bfield); )*
                $( writer.$mode($json, &self.$field); )*
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::codec::serialize_model(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                $crate::codec::deserialize_model(deserializer)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : DomainResource($type_name:literal) { $($body:tt)* }
    ) => {
        fhir_type! {
            @define
            $(#[$meta])*
            $vis struct $name : DomainResource($type_name)
            base {
                /// Logical id of this artifact
                id: optional $crate::primitive::Primitive<String> = "id",
                /// Metadata about the resource
                meta: optional $crate::r4::Meta = "meta",
                implicit_rules: optional $crate::primitive::Primitive<String> = "implicitRules",
                language: optional $crate::primitive::Primitive<String> = "language",
                /// Text summary of the resource, for human interpretation
                text: optional $crate::r4::Narrative = "text",
                /// Contained, inline resources
                contained: repeated $crate::r4::Resource = "contained",
                extension: repeated $crate::r4::Extension = "extension",
                modifier_extension: repeated $crate::r4::Extension = "modifierExtension",
            }
            fields { $($body)* }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : Resource($type_name:literal) { $($body:tt)* }
    ) => {
        fhir_type! {
            @define
            $(#[$meta])*
            $vis struct $name : Resource($type_name)
            base {
                /// Logical id of this artifact
                id: optional $crate::primitive::Primitive<String> = "id",
                /// Metadata about the resource
                meta: optional $crate::r4::Meta = "meta",
                implicit_rules: optional $crate::primitive::Primitive<String> = "implicitRules",
                language: optional $crate::primitive::Primitive<String> = "language",
            }
            fields { $($body)* }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : ComplexType($type_name:literal) { $($body:tt)* }
    ) => {
        fhir_type! {
            @define
            $(#[$meta])*
            $vis struct $name : ComplexType($type_name)
            base {
                /// Unique id for inter-element referencing
                id: optional String = "id",
                extension: repeated $crate::r4::Extension = "extension",
            }
            fields { $($body)* }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : BackboneElement($type_name:literal) { $($body:tt)* }
    ) => {
        fhir_type! {
            @define
            $(#[$meta])*
            $vis struct $name : BackboneElement($type_name)
            base {
                /// Unique id for inter-element referencing
                id: optional String = "id",
                extension: repeated $crate::r4::Extension = "extension",
                modifier_extension: repeated $crate::r4::Extension = "modifierExtension",
            }
            fields { $($body)* }
        }
    };
}
