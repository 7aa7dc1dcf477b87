//! R4 resources

mod allergy_intolerance;
mod appointment;
mod bundle;
mod condition;
mod group;
mod medication;
mod medication_statement;
mod observation;
mod organization;
mod patient;
mod practitioner;
mod related_person;

pub use allergy_intolerance::{
    AllergyIntolerance, AllergyIntoleranceOnset, AllergyIntoleranceReaction,
};
pub use appointment::{Appointment, AppointmentParticipant};
pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch, BundleLink,
};
pub use condition::{
    Condition, ConditionAbatement, ConditionEvidence, ConditionOnset, ConditionStage,
};
pub use group::{Group, GroupCharacteristic, GroupCharacteristicValue, GroupMember};
pub use medication::{Medication, MedicationBatch, MedicationIngredient, MedicationIngredientItem};
pub use medication_statement::{
    MedicationStatement, MedicationStatementEffective, MedicationStatementMedication,
};
pub use observation::{
    Observation, ObservationComponent, ObservationEffective, ObservationReferenceRange,
    ObservationValue,
};
pub use organization::{Organization, OrganizationContact};
pub use patient::{
    Patient, PatientCommunication, PatientContact, PatientDeceased, PatientLink,
    PatientMultipleBirth,
};
pub use practitioner::{Practitioner, PractitionerQualification};
pub use related_person::{RelatedPerson, RelatedPersonCommunication};
