//! Error types for the FHIR models and codec

use thiserror::Error;

/// Structural errors raised while decoding a FHIR JSON document.
///
/// Every variant carries the JSON path of the offending element, rooted at the
/// type being decoded (for example `Patient.contact[0].name.family`).
#[derive(Error, Debug)]
pub enum Error {
    #[error("{path}: missing required field")]
    MissingField { path: String },

    #[error("{path}: unknown field")]
    UnknownField { path: String },

    #[error("{path}: unknown resourceType `{resource_type}`")]
    UnknownResourceType { path: String, resource_type: String },

    #[error("{path}: expected resourceType `{expected}`, found `{found}`")]
    ResourceTypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    #[error("{path}: `{key}` is not an allowed type for this choice element")]
    UnknownChoiceType { path: String, key: String },

    #[error("{path}: more than one type present for choice element ({})", keys.join(", "))]
    AmbiguousChoice { path: String, keys: Vec<String> },

    #[error("{path}: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: invalid {type_name} value `{value}`")]
    InvalidValue {
        path: String,
        type_name: &'static str,
        value: String,
    },

    #[error("{path}: value array has {values} items but metadata array has {metadata}")]
    MismatchedArrays {
        path: String,
        values: usize,
        metadata: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A code string that is not part of the code system it was parsed for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {system} code `{code}`")]
pub struct UnknownCode {
    pub system: &'static str,
    pub code: String,
}
