use crate::primitive::{Date, DateTime, Primitive};
use crate::r4::{
    Address, AdministrativeGender, Attachment, CodeableConcept, ContactPoint, HumanName,
    Identifier, LinkType, Period, Reference,
};

fhir_type! {
    /// Demographics and other administrative information about an individual
    /// or animal receiving care or other health-related services.
    #[derive(Default)]
    pub struct Patient: DomainResource("Patient") {
        /// An identifier for this patient
        identifier: repeated Identifier = "identifier",
        /// Whether this patient's record is in active use
        active: optional Primitive<bool> = "active",
        name: repeated HumanName = "name",
        telecom: repeated ContactPoint = "telecom",
        gender: optional Primitive<AdministrativeGender> = "gender",
        birth_date: optional Primitive<Date> = "birthDate",
        deceased: choice PatientDeceased = "deceased",
        address: repeated Address = "address",
        marital_status: optional CodeableConcept = "maritalStatus",
        multiple_birth: choice PatientMultipleBirth = "multipleBirth",
        photo: repeated Attachment = "photo",
        /// A contact party (e.g. guardian, partner, friend) for the patient
        contact: repeated PatientContact = "contact",
        communication: repeated PatientCommunication = "communication",
        general_practitioner: repeated Reference = "generalPractitioner",
        managing_organization: optional Reference = "managingOrganization",
        link: repeated PatientLink = "link",
    }
}

fhir_choice! {
    pub enum PatientDeceased {
        Boolean(Primitive<bool>) = "Boolean",
        DateTime(Primitive<DateTime>) = "DateTime",
    }
}

fhir_choice! {
    pub enum PatientMultipleBirth {
        Boolean(Primitive<bool>) = "Boolean",
        Integer(Primitive<i32>) = "Integer",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct PatientContact: BackboneElement("Patient.contact") {
        relationship: repeated CodeableConcept = "relationship",
        name: optional HumanName = "name",
        telecom: repeated ContactPoint = "telecom",
        address: optional Address = "address",
        gender: optional Primitive<AdministrativeGender> = "gender",
        organization: optional Reference = "organization",
        period: optional Period = "period",
    }
}

fhir_type! {
    /// A language which may be used to communicate with the patient.
    #[derive(Default)]
    pub struct PatientCommunication: BackboneElement("Patient.communication") {
        language: required CodeableConcept = "language",
        preferred: optional Primitive<bool> = "preferred",
    }
}

fhir_type! {
    /// Link to another patient resource that concerns the same actual person.
    #[derive(Default)]
    pub struct PatientLink: BackboneElement("Patient.link") {
        other: required Reference = "other",
        type_: required Primitive<LinkType> = "type",
    }
}
