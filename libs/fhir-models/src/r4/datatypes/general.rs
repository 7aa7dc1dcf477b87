//! General-purpose data types

use crate::primitive::{DateTime, Instant, Primitive};
use crate::r4::{
    AddressType, AddressUse, ContactPointSystem, ContactPointUse, IdentifierUse, NameUse,
    QuantityComparator,
};
use rust_decimal::Decimal;

fhir_type! {
    /// A reference to a code defined by a terminology system.
    #[derive(Default)]
    pub struct Coding: ComplexType("Coding") {
        system: optional Primitive<String> = "system",
        version: optional Primitive<String> = "version",
        code: optional Primitive<String> = "code",
        display: optional Primitive<String> = "display",
        user_selected: optional Primitive<bool> = "userSelected",
    }
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

fhir_type! {
    /// A concept that may be defined by one or more codings and/or plain text.
    #[derive(Default)]
    pub struct CodeableConcept: ComplexType("CodeableConcept") {
        coding: repeated Coding = "coding",
        text: optional Primitive<String> = "text",
    }
}

impl CodeableConcept {
    pub fn from_text(text: &str) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// True when any coding has this system and code.
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|coding| {
            coding.system.as_ref().is_some_and(|s| *s == system)
                && coding.code.as_ref().is_some_and(|c| *c == code)
        })
    }
}

fhir_type! {
    /// An identifier intended for computation.
    #[derive(Default)]
    pub struct Identifier: ComplexType("Identifier") {
        use_: optional Primitive<IdentifierUse> = "use",
        type_: optional CodeableConcept = "type",
        /// The namespace for the identifier value
        system: optional Primitive<String> = "system",
        value: optional Primitive<String> = "value",
        period: optional Period = "period",
        /// Organization that issued the identifier
        assigner: optional_boxed Reference = "assigner",
    }
}

fhir_type! {
    /// A reference from one resource to another.
    #[derive(Default)]
    pub struct Reference: ComplexType("Reference") {
        /// Literal reference, relative, internal or absolute URL
        reference: optional Primitive<String> = "reference",
        type_: optional Primitive<String> = "type",
        identifier: optional Identifier = "identifier",
        display: optional Primitive<String> = "display",
    }
}

impl Reference {
    pub fn to(reference: &str) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

fhir_type! {
    /// Time range defined by start and end date/time.
    #[derive(Default)]
    pub struct Period: ComplexType("Period") {
        start: optional Primitive<DateTime> = "start",
        end: optional Primitive<DateTime> = "end",
    }
}

fhir_type! {
    /// A measured or measurable amount.
    #[derive(Default)]
    pub struct Quantity: ComplexType("Quantity") {
        value: optional Primitive<Decimal> = "value",
        comparator: optional Primitive<QuantityComparator> = "comparator",
        unit: optional Primitive<String> = "unit",
        system: optional Primitive<String> = "system",
        code: optional Primitive<String> = "code",
    }
}

/// Profiles of `Quantity`; they share its JSON shape.
pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

fhir_type! {
    #[derive(Default)]
    pub struct Range: ComplexType("Range") {
        low: optional Quantity = "low",
        high: optional Quantity = "high",
    }
}

fhir_type! {
    /// A ratio of two Quantity values.
    #[derive(Default)]
    pub struct Ratio: ComplexType("Ratio") {
        numerator: optional Quantity = "numerator",
        denominator: optional Quantity = "denominator",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct Money: ComplexType("Money") {
        value: optional Primitive<Decimal> = "value",
        /// ISO 4217 currency code
        currency: optional Primitive<String> = "currency",
    }
}

fhir_type! {
    /// Name of a human, with text, parts and usage information.
    #[derive(Default)]
    pub struct HumanName: ComplexType("HumanName") {
        use_: optional Primitive<NameUse> = "use",
        text: optional Primitive<String> = "text",
        family: optional Primitive<String> = "family",
        given: repeated Primitive<String> = "given",
        prefix: repeated Primitive<String> = "prefix",
        suffix: repeated Primitive<String> = "suffix",
        period: optional Period = "period",
    }
}

impl HumanName {
    /// Given names that have a value, in order.
    pub fn given_names(&self) -> impl Iterator<Item = &str> {
        self.given.iter().filter_map(|given| given.value.as_deref())
    }
}

fhir_type! {
    /// A postal address or physical location.
    #[derive(Default)]
    pub struct Address: ComplexType("Address") {
        use_: optional Primitive<AddressUse> = "use",
        type_: optional Primitive<AddressType> = "type",
        text: optional Primitive<String> = "text",
        line: repeated Primitive<String> = "line",
        city: optional Primitive<String> = "city",
        district: optional Primitive<String> = "district",
        state: optional Primitive<String> = "state",
        postal_code: optional Primitive<String> = "postalCode",
        country: optional Primitive<String> = "country",
        period: optional Period = "period",
    }
}

fhir_type! {
    /// Details for all kinds of technology-mediated contact points.
    #[derive(Default)]
    pub struct ContactPoint: ComplexType("ContactPoint") {
        system: optional Primitive<ContactPointSystem> = "system",
        value: optional Primitive<String> = "value",
        use_: optional Primitive<ContactPointUse> = "use",
        /// Preferred order of use (1 = highest)
        rank: optional Primitive<u32> = "rank",
        period: optional Period = "period",
    }
}

fhir_type! {
    /// Content in a format defined elsewhere.
    #[derive(Default)]
    pub struct Attachment: ComplexType("Attachment") {
        content_type: optional Primitive<String> = "contentType",
        language: optional Primitive<String> = "language",
        /// Base64 encoded data
        data: optional Primitive<String> = "data",
        url: optional Primitive<String> = "url",
        size: optional Primitive<u32> = "size",
        hash: optional Primitive<String> = "hash",
        title: optional Primitive<String> = "title",
        creation: optional Primitive<DateTime> = "creation",
    }
}

fhir_type! {
    /// A text note which also contains information about who made the statement and when.
    #[derive(Default)]
    pub struct Annotation: ComplexType("Annotation") {
        author: choice AnnotationAuthor = "author",
        time: optional Primitive<DateTime> = "time",
        text: required Primitive<String> = "text",
    }
}

fhir_choice! {
    pub enum AnnotationAuthor {
        Reference(Reference) = "Reference",
        String(Primitive<String>) = "String",
    }
}

fhir_type! {
    /// A digital signature along with supporting context.
    pub struct Signature: ComplexType("Signature") {
        type_: required_repeated Coding = "type",
        when: required Primitive<Instant> = "when",
        who: required Reference = "who",
        on_behalf_of: optional Reference = "onBehalfOf",
        target_format: optional Primitive<String> = "targetFormat",
        sig_format: optional Primitive<String> = "sigFormat",
        data: optional Primitive<String> = "data",
    }
}
