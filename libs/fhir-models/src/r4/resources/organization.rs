use crate::primitive::Primitive;
use crate::r4::{Address, CodeableConcept, ContactPoint, HumanName, Identifier, Reference};

fhir_type! {
    /// A formally or informally recognized grouping of people or organizations.
    #[derive(Default)]
    pub struct Organization: DomainResource("Organization") {
        identifier: repeated Identifier = "identifier",
        active: optional Primitive<bool> = "active",
        type_: repeated CodeableConcept = "type",
        name: optional Primitive<String> = "name",
        /// Alternate names the organization is known as
        alias: repeated Primitive<String> = "alias",
        telecom: repeated ContactPoint = "telecom",
        address: repeated Address = "address",
        part_of: optional Reference = "partOf",
        contact: repeated OrganizationContact = "contact",
        endpoint: repeated Reference = "endpoint",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct OrganizationContact: BackboneElement("Organization.contact") {
        purpose: optional CodeableConcept = "purpose",
        name: optional HumanName = "name",
        telecom: repeated ContactPoint = "telecom",
        address: optional Address = "address",
    }
}
