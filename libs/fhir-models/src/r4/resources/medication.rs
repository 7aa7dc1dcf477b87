use crate::primitive::{DateTime, Primitive};
use crate::r4::{CodeableConcept, Identifier, MedicationStatus, Ratio, Reference};

fhir_type! {
    /// Primarily used for the identification and definition of a medication.
    #[derive(Default)]
    pub struct Medication: DomainResource("Medication") {
        identifier: repeated Identifier = "identifier",
        /// Codes that identify this medication
        code: optional CodeableConcept = "code",
        status: optional Primitive<MedicationStatus> = "status",
        manufacturer: optional Reference = "manufacturer",
        form: optional CodeableConcept = "form",
        amount: optional Ratio = "amount",
        ingredient: repeated MedicationIngredient = "ingredient",
        batch: optional MedicationBatch = "batch",
    }
}

fhir_type! {
    /// Active or inactive ingredient.
    pub struct MedicationIngredient: BackboneElement("Medication.ingredient") {
        item: required_choice MedicationIngredientItem = "item",
        is_active: optional Primitive<bool> = "isActive",
        strength: optional Ratio = "strength",
    }
}

fhir_choice! {
    pub enum MedicationIngredientItem {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Reference(Reference) = "Reference",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct MedicationBatch: BackboneElement("Medication.batch") {
        lot_number: optional Primitive<String> = "lotNumber",
        expiration_date: optional Primitive<DateTime> = "expirationDate",
    }
}
