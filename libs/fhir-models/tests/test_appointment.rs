//! Appointment example with participants and instants

use chrono::{TimeZone, Utc};
use ferrum_r4_models::r4::{
    Appointment, AppointmentStatus, NarrativeStatus, ParticipantRequired, ParticipationStatus,
};
use ferrum_r4_models::{PrimitiveField, StringField};

mod test_support;

#[test]
fn test_appointment_example() {
    let appointment: Appointment = test_support::round_trip_fixture("appointment-example.json");

    assert_eq!(appointment.id.as_str(), Some("example"));
    assert_eq!(appointment.status, AppointmentStatus::Booked);
    assert_eq!(
        appointment.text.as_ref().expect("text").status,
        NarrativeStatus::Generated
    );
    assert_eq!(
        appointment.description.as_str(),
        Some("Discussion on the results of your recent MRI")
    );
    assert_eq!(appointment.priority.value(), Some(&5));
    assert_eq!(
        appointment.created.value().map(ToString::to_string),
        Some("2013-10-10".to_string())
    );

    let start = appointment
        .start
        .value()
        .and_then(|start| start.to_chrono())
        .expect("start instant");
    assert_eq!(start, Utc.with_ymd_and_hms(2013, 12, 10, 9, 0, 0).unwrap());
    assert_eq!(
        appointment.end.value().map(ToString::to_string),
        Some("2013-12-10T11:00:00Z".to_string())
    );

    assert_eq!(appointment.service_category[0].coding[0].code.as_str(), Some("gp"));
    assert_eq!(appointment.service_type[0].coding[0].code.as_str(), Some("52"));
    assert!(appointment.specialty[0].has_coding("http://snomed.info/sct", "394814009"));
    assert!(appointment
        .appointment_type
        .as_ref()
        .is_some_and(|kind| kind
            .has_coding("http://terminology.hl7.org/CodeSystem/v2-0276", "FOLLOWUP")));
    assert_eq!(
        appointment.reason_reference[0].display.as_str(),
        Some("Severe burn of left ear")
    );
    assert_eq!(
        appointment.based_on[0].reference.as_str(),
        Some("ServiceRequest/myringotomy")
    );
}

#[test]
fn test_appointment_participants() {
    let appointment: Appointment = test_support::decode_fixture("appointment-example.json");

    assert_eq!(appointment.participant.len(), 3);
    for participant in &appointment.participant {
        assert_eq!(participant.status, ParticipationStatus::Accepted);
        assert_eq!(participant.required.value(), Some(&ParticipantRequired::Required));
    }

    let actors: Vec<_> = appointment
        .participant
        .iter()
        .filter_map(|participant| participant.actor.as_ref())
        .filter_map(|actor| actor.display.as_str())
        .collect();
    assert_eq!(
        actors,
        vec![
            "Peter James Chalmers",
            "Dr Adam Careful",
            "South Wing, second floor"
        ]
    );
    assert_eq!(appointment.participant[1].type_[0].coding[0].code.as_str(), Some("ATND"));
}
