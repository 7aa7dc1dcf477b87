use crate::primitive::{Date, Primitive};
use crate::r4::{
    Address, AdministrativeGender, Attachment, CodeableConcept, ContactPoint, HumanName,
    Identifier, Period, Reference,
};

fhir_type! {
    /// Information about a person that is involved in the care for a patient,
    /// but who is not the target of healthcare.
    #[derive(Default)]
    pub struct RelatedPerson: DomainResource("RelatedPerson") {
        identifier: repeated Identifier = "identifier",
        active: optional Primitive<bool> = "active",
        /// The patient this person is related to
        patient: required Reference = "patient",
        relationship: repeated CodeableConcept = "relationship",
        name: repeated HumanName = "name",
        telecom: repeated ContactPoint = "telecom",
        gender: optional Primitive<AdministrativeGender> = "gender",
        birth_date: optional Primitive<Date> = "birthDate",
        address: repeated Address = "address",
        photo: repeated Attachment = "photo",
        period: optional Period = "period",
        communication: repeated RelatedPersonCommunication = "communication",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct RelatedPersonCommunication: BackboneElement("RelatedPerson.communication") {
        language: required CodeableConcept = "language",
        preferred: optional Primitive<bool> = "preferred",
    }
}
