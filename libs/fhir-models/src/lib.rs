//! FHIR R4 data models
//!
//! This crate provides strongly-typed Rust structures for FHIR R4 resources
//! and a JSON codec that converts them to and from FHIR JSON without losing
//! information.
//!
//! # Module Organization
//!
//! - `primitive`: primitive-with-extension values and FHIR date/time types
//! - `codec`: the JSON decoder/encoder and field descriptor tables
//! - `r4`: data types, resources and required-binding code systems
//!
//! # Design
//!
//! - Every primitive field is a [`Primitive`], so `_field` metadata survives a round trip
//! - Choice elements (`value[x]`) are enums with one variant per allowed type
//! - `contained` resources and Bundle entries use the [`Resource`] enum
//!
//! # Example
//!
//! ```rust
//! use ferrum_r4_models::r4::{AdministrativeGender, Patient};
//! use ferrum_r4_models::{JsonCodec, PrimitiveField, StringField};
//!
//! let json = r#"{
//!     "resourceType": "Patient",
//!     "id": "example",
//!     "name": [{"family": "Chalmers", "given": ["Peter", "James"]}],
//!     "gender": "male",
//!     "birthDate": "1974-12-25",
//!     "_birthDate": {
//!         "extension": [{
//!             "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
//!             "valueDateTime": "1974-12-25T14:35:45-05:00"
//!         }]
//!     }
//! }"#;
//!
//! let codec = JsonCodec::default();
//! let patient: Patient = codec.decode(json).unwrap();
//! assert_eq!(patient.name[0].family.as_str(), Some("Chalmers"));
//! assert_eq!(patient.gender.value(), Some(&AdministrativeGender::Male));
//!
//! let value = codec.encode(&patient);
//! assert_eq!(
//!     value["_birthDate"]["extension"][0]["valueDateTime"],
//!     "1974-12-25T14:35:45-05:00"
//! );
//! ```

pub mod codec;
pub mod error;
pub mod primitive;
pub mod r4;

pub use codec::{
    from_str, from_value, to_string, to_value, ComplexType, DecodeOptions, JsonCodec, JsonModel,
};
pub use error::{Error, Result, UnknownCode};
pub use primitive::{Primitive, PrimitiveField, PrimitiveValue, StringField};
pub use r4::{Resource, ResourceType};
