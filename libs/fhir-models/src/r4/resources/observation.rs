use crate::primitive::{DateTime, Instant, Primitive, Time};
use crate::r4::{
    Annotation, CodeableConcept, Identifier, ObservationStatus, Period, Quantity, Range, Ratio,
    Reference, Timing,
};

fhir_type! {
    /// Measurements and simple assertions made about a patient, device or other subject.
    pub struct Observation: DomainResource("Observation") {
        identifier: repeated Identifier = "identifier",
        based_on: repeated Reference = "basedOn",
        part_of: repeated Reference = "partOf",
        /// registered | preliminary | final | amended +
        status: required Primitive<ObservationStatus> = "status",
        category: repeated CodeableConcept = "category",
        /// Type of observation (code / type)
        code: required CodeableConcept = "code",
        subject: optional Reference = "subject",
        focus: repeated Reference = "focus",
        encounter: optional Reference = "encounter",
        effective: choice ObservationEffective = "effective",
        issued: optional Primitive<Instant> = "issued",
        performer: repeated Reference = "performer",
        value: choice ObservationValue = "value",
        data_absent_reason: optional CodeableConcept = "dataAbsentReason",
        interpretation: repeated CodeableConcept = "interpretation",
        note: repeated Annotation = "note",
        body_site: optional CodeableConcept = "bodySite",
        method: optional CodeableConcept = "method",
        specimen: optional Reference = "specimen",
        device: optional Reference = "device",
        reference_range: repeated ObservationReferenceRange = "referenceRange",
        has_member: repeated Reference = "hasMember",
        derived_from: repeated Reference = "derivedFrom",
        /// Component results
        component: repeated ObservationComponent = "component",
    }
}

fhir_choice! {
    pub enum ObservationEffective {
        DateTime(Primitive<DateTime>) = "DateTime",
        Period(Period) = "Period",
        Timing(Timing) = "Timing",
        Instant(Primitive<Instant>) = "Instant",
    }
}

fhir_choice! {
    /// Actual result of an observation or one of its components.
    pub enum ObservationValue {
        Quantity(Quantity) = "Quantity",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        String(Primitive<String>) = "String",
        Boolean(Primitive<bool>) = "Boolean",
        Integer(Primitive<i32>) = "Integer",
        Range(Range) = "Range",
        Ratio(Ratio) = "Ratio",
        Time(Primitive<Time>) = "Time",
        DateTime(Primitive<DateTime>) = "DateTime",
        Period(Period) = "Period",
    }
}

fhir_type! {
    /// Provides guide for interpretation.
    #[derive(Default)]
    pub struct ObservationReferenceRange: BackboneElement("Observation.referenceRange") {
        low: optional Quantity = "low",
        high: optional Quantity = "high",
        type_: optional CodeableConcept = "type",
        applies_to: repeated CodeableConcept = "appliesTo",
        age: optional Range = "age",
        text: optional Primitive<String> = "text",
    }
}

fhir_type! {
    pub struct ObservationComponent: BackboneElement("Observation.component") {
        code: required CodeableConcept = "code",
        value: choice ObservationValue = "value",
        data_absent_reason: optional CodeableConcept = "dataAbsentReason",
        interpretation: repeated CodeableConcept = "interpretation",
        reference_range: repeated ObservationReferenceRange = "referenceRange",
    }
}
