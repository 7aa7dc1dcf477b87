use crate::primitive::{DateTime, Instant, Primitive};
use crate::r4::{
    AppointmentStatus, CodeableConcept, Identifier, ParticipantRequired, ParticipationStatus,
    Period, Reference,
};

fhir_type! {
    /// A booking of a healthcare event among patient(s), practitioner(s),
    /// related person(s) and/or device(s) for a specific date/time.
    #[derive(Default)]
    pub struct Appointment: DomainResource("Appointment") {
        identifier: repeated Identifier = "identifier",
        status: required Primitive<AppointmentStatus> = "status",
        cancelation_reason: optional CodeableConcept = "cancelationReason",
        service_category: repeated CodeableConcept = "serviceCategory",
        service_type: repeated CodeableConcept = "serviceType",
        specialty: repeated CodeableConcept = "specialty",
        appointment_type: optional CodeableConcept = "appointmentType",
        reason_code: repeated CodeableConcept = "reasonCode",
        reason_reference: repeated Reference = "reasonReference",
        /// Used to make informed decisions if needing to re-prioritize
        priority: optional Primitive<u32> = "priority",
        description: optional Primitive<String> = "description",
        supporting_information: repeated Reference = "supportingInformation",
        start: optional Primitive<Instant> = "start",
        end: optional Primitive<Instant> = "end",
        minutes_duration: optional Primitive<u32> = "minutesDuration",
        slot: repeated Reference = "slot",
        created: optional Primitive<DateTime> = "created",
        comment: optional Primitive<String> = "comment",
        patient_instruction: optional Primitive<String> = "patientInstruction",
        based_on: repeated Reference = "basedOn",
        /// Participants involved in appointment
        participant: required_repeated AppointmentParticipant = "participant",
        requested_period: repeated Period = "requestedPeriod",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct AppointmentParticipant: BackboneElement("Appointment.participant") {
        type_: repeated CodeableConcept = "type",
        actor: optional Reference = "actor",
        required: optional Primitive<ParticipantRequired> = "required",
        status: required Primitive<ParticipationStatus> = "status",
        period: optional Period = "period",
    }
}
