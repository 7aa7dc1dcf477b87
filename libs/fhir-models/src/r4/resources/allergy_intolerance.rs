use crate::primitive::{DateTime, Primitive};
use crate::r4::{
    AllergyIntoleranceCategory, AllergyIntoleranceCriticality, AllergyIntoleranceSeverity,
    AllergyIntoleranceType, Annotation, CodeableConcept, Identifier, Period, Quantity, Range,
    Reference,
};

fhir_type! {
    /// Risk of harmful or undesirable, physiological response which is unique
    /// to an individual and associated with exposure to a substance.
    #[derive(Default)]
    pub struct AllergyIntolerance: DomainResource("AllergyIntolerance") {
        identifier: repeated Identifier = "identifier",
        /// active | inactive | resolved
        clinical_status: optional CodeableConcept = "clinicalStatus",
        verification_status: optional CodeableConcept = "verificationStatus",
        type_: optional Primitive<AllergyIntoleranceType> = "type",
        category: repeated Primitive<AllergyIntoleranceCategory> = "category",
        criticality: optional Primitive<AllergyIntoleranceCriticality> = "criticality",
        /// Code that identifies the allergy or intolerance
        code: optional CodeableConcept = "code",
        patient: required Reference = "patient",
        encounter: optional Reference = "encounter",
        onset: choice AllergyIntoleranceOnset = "onset",
        recorded_date: optional Primitive<DateTime> = "recordedDate",
        recorder: optional Reference = "recorder",
        asserter: optional Reference = "asserter",
        last_occurrence: optional Primitive<DateTime> = "lastOccurrence",
        note: repeated Annotation = "note",
        /// Adverse reaction events linked to exposure to substance
        reaction: repeated AllergyIntoleranceReaction = "reaction",
    }
}

fhir_choice! {
    pub enum AllergyIntoleranceOnset {
        DateTime(Primitive<DateTime>) = "DateTime",
        Age(Quantity) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(Primitive<String>) = "String",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct AllergyIntoleranceReaction: BackboneElement("AllergyIntolerance.reaction") {
        /// Specific substance or pharmaceutical product considered to be responsible for event
        substance: optional CodeableConcept = "substance",
        manifestation: required_repeated CodeableConcept = "manifestation",
        description: optional Primitive<String> = "description",
        onset: optional Primitive<DateTime> = "onset",
        severity: optional Primitive<AllergyIntoleranceSeverity> = "severity",
        exposure_route: optional CodeableConcept = "exposureRoute",
        note: repeated Annotation = "note",
    }
}
