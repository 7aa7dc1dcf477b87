use crate::primitive::{DateTime, Primitive};
use crate::r4::{Annotation, CodeableConcept, Identifier, Period, Quantity, Range, Reference};

fhir_type! {
    /// A clinical condition, problem, diagnosis, or other event, situation,
    /// issue, or clinical concept that has risen to a level of concern.
    #[derive(Default)]
    pub struct Condition: DomainResource("Condition") {
        identifier: repeated Identifier = "identifier",
        clinical_status: optional CodeableConcept = "clinicalStatus",
        verification_status: optional CodeableConcept = "verificationStatus",
        category: repeated CodeableConcept = "category",
        severity: optional CodeableConcept = "severity",
        /// Identification of the condition, problem or diagnosis
        code: optional CodeableConcept = "code",
        body_site: repeated CodeableConcept = "bodySite",
        subject: required Reference = "subject",
        encounter: optional Reference = "encounter",
        onset: choice ConditionOnset = "onset",
        /// When in resolution/remission
        abatement: choice ConditionAbatement = "abatement",
        recorded_date: optional Primitive<DateTime> = "recordedDate",
        recorder: optional Reference = "recorder",
        asserter: optional Reference = "asserter",
        stage: repeated ConditionStage = "stage",
        evidence: repeated ConditionEvidence = "evidence",
        note: repeated Annotation = "note",
    }
}

fhir_choice! {
    pub enum ConditionOnset {
        DateTime(Primitive<DateTime>) = "DateTime",
        Age(Quantity) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(Primitive<String>) = "String",
    }
}

fhir_choice! {
    pub enum ConditionAbatement {
        DateTime(Primitive<DateTime>) = "DateTime",
        Age(Quantity) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(Primitive<String>) = "String",
    }
}

fhir_type! {
    /// Stage/grade, usually assessed formally.
    #[derive(Default)]
    pub struct ConditionStage: BackboneElement("Condition.stage") {
        summary: optional CodeableConcept = "summary",
        assessment: repeated Reference = "assessment",
        type_: optional CodeableConcept = "type",
    }
}

fhir_type! {
    /// Supporting evidence for the verification status.
    #[derive(Default)]
    pub struct ConditionEvidence: BackboneElement("Condition.evidence") {
        code: repeated CodeableConcept = "code",
        detail: repeated Reference = "detail",
    }
}
