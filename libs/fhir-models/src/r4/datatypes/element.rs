//! Extension, Meta and Narrative

use super::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Dosage, HumanName,
    Identifier, Money, Period, Quantity, Range, Ratio, Reference, Signature, Timing,
};
use crate::primitive::{Date, DateTime, Instant, Primitive, Time};
use crate::r4::NarrativeStatus;
use rust_decimal::Decimal;

fhir_type! {
    /// Additional content defined by implementations.
    ///
    /// An extension either carries a value or nested extensions, never both.
    #[derive(Default)]
    pub struct Extension: ComplexType("Extension") {
        /// Identifies the meaning of the extension
        url: required String = "url",
        value: choice ExtensionValue = "value",
    }
}

impl Extension {
    pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            ..Default::default()
        }
    }

    /// The first nested extension with the given url.
    pub fn extension_by_url(&self, url: &str) -> Option<&Extension> {
        self.extension.iter().find(|ext| ext.url == url)
    }
}

fhir_choice! {
    /// `Extension.value[x]`
    pub enum ExtensionValue {
        Base64Binary(Primitive<String>) = "Base64Binary",
        Boolean(Primitive<bool>) = "Boolean",
        Canonical(Primitive<String>) = "Canonical",
        Code(Primitive<String>) = "Code",
        Date(Primitive<Date>) = "Date",
        DateTime(Primitive<DateTime>) = "DateTime",
        Decimal(Primitive<Decimal>) = "Decimal",
        Id(Primitive<String>) = "Id",
        Instant(Primitive<Instant>) = "Instant",
        Integer(Primitive<i32>) = "Integer",
        Markdown(Primitive<String>) = "Markdown",
        Oid(Primitive<String>) = "Oid",
        PositiveInt(Primitive<u32>) = "PositiveInt",
        String(Primitive<String>) = "String",
        Time(Primitive<Time>) = "Time",
        UnsignedInt(Primitive<u32>) = "UnsignedInt",
        Uri(Primitive<String>) = "Uri",
        Url(Primitive<String>) = "Url",
        Uuid(Primitive<String>) = "Uuid",
        Address(Address) = "Address",
        Age(Quantity) = "Age",
        Annotation(Annotation) = "Annotation",
        Attachment(Attachment) = "Attachment",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Coding(Coding) = "Coding",
        ContactPoint(ContactPoint) = "ContactPoint",
        Count(Quantity) = "Count",
        Distance(Quantity) = "Distance",
        Duration(Quantity) = "Duration",
        HumanName(HumanName) = "HumanName",
        Identifier(Identifier) = "Identifier",
        Money(Money) = "Money",
        Period(Period) = "Period",
        Quantity(Quantity) = "Quantity",
        Range(Range) = "Range",
        Ratio(Ratio) = "Ratio",
        Reference(Reference) = "Reference",
        Signature(Signature) = "Signature",
        Timing(Timing) = "Timing",
        Dosage(Dosage) = "Dosage",
        Meta(Meta) = "Meta",
    }
}

fhir_type! {
    /// Metadata about a resource.
    #[derive(Default)]
    pub struct Meta: ComplexType("Meta") {
        version_id: optional Primitive<String> = "versionId",
        /// When the resource version last changed
        last_updated: optional Primitive<Instant> = "lastUpdated",
        source: optional Primitive<String> = "source",
        profile: repeated Primitive<String> = "profile",
        security: repeated Coding = "security",
        tag: repeated Coding = "tag",
    }
}

fhir_type! {
    /// Human-readable summary of the resource (XHTML `div`).
    #[derive(Default)]
    pub struct Narrative: ComplexType("Narrative") {
        status: required Primitive<NarrativeStatus> = "status",
        div: required Primitive<String> = "div",
    }
}
