use crate::primitive::Primitive;
use crate::r4::{CodeableConcept, GroupType, Identifier, Period, Quantity, Range, Reference};

fhir_type! {
    /// A defined collection of entities that may be discussed or acted upon
    /// collectively but which are not expected to act collectively.
    #[derive(Default)]
    pub struct Group: DomainResource("Group") {
        identifier: repeated Identifier = "identifier",
        active: optional Primitive<bool> = "active",
        /// person | animal | practitioner | device | medication | substance
        type_: required Primitive<GroupType> = "type",
        /// Descriptive or actual
        actual: required Primitive<bool> = "actual",
        code: optional CodeableConcept = "code",
        name: optional Primitive<String> = "name",
        /// Number of members
        quantity: optional Primitive<u32> = "quantity",
        managing_entity: optional Reference = "managingEntity",
        characteristic: repeated GroupCharacteristic = "characteristic",
        member: repeated GroupMember = "member",
    }
}

fhir_type! {
    /// Include / Exclude group members by trait.
    pub struct GroupCharacteristic: BackboneElement("Group.characteristic") {
        code: required CodeableConcept = "code",
        value: required_choice GroupCharacteristicValue = "value",
        exclude: required Primitive<bool> = "exclude",
        period: optional Period = "period",
    }
}

fhir_choice! {
    pub enum GroupCharacteristicValue {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Boolean(Primitive<bool>) = "Boolean",
        Quantity(Quantity) = "Quantity",
        Range(Range) = "Range",
        Reference(Reference) = "Reference",
    }
}

fhir_type! {
    /// Who or what is in the group.
    #[derive(Default)]
    pub struct GroupMember: BackboneElement("Group.member") {
        entity: required Reference = "entity",
        period: optional Period = "period",
        inactive: optional Primitive<bool> = "inactive",
    }
}
