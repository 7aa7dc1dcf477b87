use crate::primitive::{Date, Primitive};
use crate::r4::{
    Address, AdministrativeGender, Attachment, CodeableConcept, ContactPoint, HumanName,
    Identifier, Period, Reference,
};

fhir_type! {
    /// A person with a formal responsibility in the provisioning of healthcare
    /// or related services.
    #[derive(Default)]
    pub struct Practitioner: DomainResource("Practitioner") {
        identifier: repeated Identifier = "identifier",
        active: optional Primitive<bool> = "active",
        name: repeated HumanName = "name",
        telecom: repeated ContactPoint = "telecom",
        address: repeated Address = "address",
        gender: optional Primitive<AdministrativeGender> = "gender",
        birth_date: optional Primitive<Date> = "birthDate",
        photo: repeated Attachment = "photo",
        /// Certification, licenses, or training pertaining to the provision of care
        qualification: repeated PractitionerQualification = "qualification",
        communication: repeated CodeableConcept = "communication",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct PractitionerQualification: BackboneElement("Practitioner.qualification") {
        identifier: repeated Identifier = "identifier",
        code: required CodeableConcept = "code",
        period: optional Period = "period",
        issuer: optional Reference = "issuer",
    }
}
