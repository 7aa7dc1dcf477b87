use crate::primitive::{DateTime, Primitive};
use crate::r4::{
    Annotation, CodeableConcept, Dosage, Identifier, MedicationStatementStatus, Period, Reference,
};

fhir_type! {
    /// A record of a medication that is being consumed by a patient.
    pub struct MedicationStatement: DomainResource("MedicationStatement") {
        identifier: repeated Identifier = "identifier",
        based_on: repeated Reference = "basedOn",
        part_of: repeated Reference = "partOf",
        status: required Primitive<MedicationStatementStatus> = "status",
        status_reason: repeated CodeableConcept = "statusReason",
        category: optional CodeableConcept = "category",
        /// What medication was taken
        medication: required_choice MedicationStatementMedication = "medication",
        subject: required Reference = "subject",
        context: optional Reference = "context",
        effective: choice MedicationStatementEffective = "effective",
        /// When the statement was asserted
        date_asserted: optional Primitive<DateTime> = "dateAsserted",
        information_source: optional Reference = "informationSource",
        derived_from: repeated Reference = "derivedFrom",
        reason_code: repeated CodeableConcept = "reasonCode",
        reason_reference: repeated Reference = "reasonReference",
        note: repeated Annotation = "note",
        dosage: repeated Dosage = "dosage",
    }
}

fhir_choice! {
    pub enum MedicationStatementMedication {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Reference(Reference) = "Reference",
    }
}

fhir_choice! {
    pub enum MedicationStatementEffective {
        DateTime(Primitive<DateTime>) = "DateTime",
        Period(Period) = "Period",
    }
}
