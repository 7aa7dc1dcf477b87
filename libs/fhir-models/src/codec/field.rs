//! Field descriptor tables
//!
//! Each model type lists its JSON fields in a static table. The decoder uses
//! the tables to classify keys it did not consume, and callers can use them to
//! look up a field's shape by name.

/// Structural category of a model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Resource,
    DomainResource,
    ComplexType,
    BackboneElement,
}

impl TypeKind {
    /// Fields every type of this kind inherits.
    pub const fn base_fields(self) -> &'static [Field] {
        match self {
            TypeKind::Resource => RESOURCE_FIELDS,
            TypeKind::DomainResource => DOMAIN_RESOURCE_FIELDS,
            TypeKind::ComplexType => ELEMENT_FIELDS,
            TypeKind::BackboneElement => BACKBONE_ELEMENT_FIELDS,
        }
    }

    pub const fn is_resource(self) -> bool {
        matches!(self, TypeKind::Resource | TypeKind::DomainResource)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive value, possibly with a `_name` metadata sibling
    Primitive,
    Complex,
    /// Inline resource selected by `resourceType`
    Resource,
    /// `name[x]` with the allowed type suffixes
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// JSON name; for choices the name without suffix (`value` for `value[x]`)
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub repeated: bool,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            repeated: false,
        }
    }

    pub const fn primitive(name: &'static str) -> Self {
        Self::new(name, FieldKind::Primitive)
    }

    pub const fn complex(name: &'static str) -> Self {
        Self::new(name, FieldKind::Complex)
    }

    pub const fn resource(name: &'static str) -> Self {
        Self::new(name, FieldKind::Resource)
    }

    pub const fn choice(name: &'static str, suffixes: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Choice(suffixes))
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn repeated(self) -> Self {
        Self {
            repeated: true,
            ..self
        }
    }

    /// The JSON keys this field may appear under, metadata keys excluded.
    pub fn json_keys(&self) -> Vec<String> {
        match self.kind {
            FieldKind::Choice(suffixes) => suffixes
                .iter()
                .map(|suffix| format!("{}{}", self.name, suffix))
                .collect(),
            _ => vec![self.name.to_string()],
        }
    }

    /// True when `key` (or its `_key` metadata form) belongs to this field.
    pub fn matches_key(&self, key: &str) -> bool {
        let bare = key.strip_prefix('_').unwrap_or(key);
        match self.kind {
            FieldKind::Choice(suffixes) => bare
                .strip_prefix(self.name)
                .is_some_and(|suffix| suffixes.iter().any(|s| *s == suffix)),
            _ => bare == self.name,
        }
    }

    /// True when `key` looks like this choice field with an unlisted type suffix.
    pub fn is_choice_near_miss(&self, key: &str) -> bool {
        let FieldKind::Choice(suffixes) = self.kind else {
            return false;
        };
        let bare = key.strip_prefix('_').unwrap_or(key);
        bare.strip_prefix(self.name).is_some_and(|rest| {
            rest.starts_with(|c: char| c.is_ascii_uppercase())
                && !suffixes.iter().any(|s| *s == rest)
        })
    }
}

pub const ELEMENT_FIELDS: &[Field] = &[
    Field::primitive("id"),
    Field::complex("extension").repeated(),
];

pub const BACKBONE_ELEMENT_FIELDS: &[Field] = &[
    Field::primitive("id"),
    Field::complex("extension").repeated(),
    Field::complex("modifierExtension").repeated(),
];

pub const RESOURCE_FIELDS: &[Field] = &[
    Field::primitive("id"),
    Field::complex("meta"),
    Field::primitive("implicitRules"),
    Field::primitive("language"),
];

pub const DOMAIN_RESOURCE_FIELDS: &[Field] = &[
    Field::primitive("id"),
    Field::complex("meta"),
    Field::primitive("implicitRules"),
    Field::primitive("language"),
    Field::complex("text"),
    Field::resource("contained").repeated(),
    Field::complex("extension").repeated(),
    Field::complex("modifierExtension").repeated(),
];

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE: Field = Field::choice("value", &["String", "Quantity"]);

    #[test]
    fn choice_keys() {
        assert!(VALUE.matches_key("valueString"));
        assert!(VALUE.matches_key("_valueString"));
        assert!(!VALUE.matches_key("valueFoo"));
        assert!(VALUE.is_choice_near_miss("valueFoo"));
        assert!(!VALUE.is_choice_near_miss("valued"));
        assert!(!VALUE.is_choice_near_miss("_valueQuantity"));
        assert_eq!(VALUE.json_keys(), vec!["valueString", "valueQuantity"]);
    }

    #[test]
    fn builders() {
        let field = Field::primitive("status").required();
        assert!(field.required);
        assert!(!field.repeated);
        assert!(TypeKind::DomainResource.is_resource());
        assert_eq!(TypeKind::BackboneElement.base_fields().len(), 3);
    }
}
