//! Patient examples: `_field` metadata, aligned arrays and choice elements

use ferrum_r4_models::primitive::{Date, DateTime};
use ferrum_r4_models::r4::{
    AddressType, AddressUse, AdministrativeGender, ContactPointSystem, ContactPointUse,
    ExtensionValue, IdentifierUse, NameUse, Patient, PatientDeceased, PatientMultipleBirth,
};
use ferrum_r4_models::{JsonCodec, PrimitiveField, StringField};

mod test_support;

const BIRTH_TIME: &str = "http://hl7.org/fhir/StructureDefinition/patient-birthTime";

#[test]
fn test_patient_example() {
    let patient: Patient = test_support::round_trip_fixture("patient-example.json");

    assert_eq!(patient.id.as_str(), Some("example"));
    assert_eq!(patient.active.value(), Some(&true));
    assert_eq!(patient.gender.value(), Some(&AdministrativeGender::Male));
    assert_eq!(
        patient.birth_date.value(),
        Some(&Date::from_ymd(1974, 12, 25).expect("valid date"))
    );
    assert!(matches!(
        patient.deceased,
        Some(PatientDeceased::Boolean(ref deceased)) if deceased.value() == Some(&false)
    ));
    assert_eq!(
        patient
            .managing_organization
            .as_ref()
            .and_then(|org| org.reference.as_str()),
        Some("Organization/1")
    );

    let identifier = &patient.identifier[0];
    assert_eq!(identifier.use_.value(), Some(&IdentifierUse::Usual));
    assert_eq!(identifier.value.as_str(), Some("12345"));
    assert_eq!(
        identifier
            .assigner
            .as_ref()
            .and_then(|assigner| assigner.display.as_str()),
        Some("Acme Healthcare")
    );
}

#[test]
fn test_patient_names_and_telecom() {
    let patient: Patient = test_support::decode_fixture("patient-example.json");

    assert_eq!(patient.name.len(), 3);
    let official = &patient.name[0];
    assert_eq!(official.use_.value(), Some(&NameUse::Official));
    assert_eq!(official.family.as_str(), Some("Chalmers"));
    assert_eq!(official.given_names().collect::<Vec<_>>(), vec!["Peter", "James"]);
    assert_eq!(patient.name[1].given_names().collect::<Vec<_>>(), vec!["Jim"]);
    assert_eq!(
        patient.name[2]
            .period
            .as_ref()
            .and_then(|period| period.end.value())
            .map(ToString::to_string),
        Some("2002".to_string())
    );

    assert_eq!(patient.telecom.len(), 4);
    assert_eq!(patient.telecom[0].use_.value(), Some(&ContactPointUse::Home));
    assert!(patient.telecom[0].system.is_none());
    assert_eq!(patient.telecom[2].system.value(), Some(&ContactPointSystem::Phone));
    assert_eq!(patient.telecom[2].rank.value(), Some(&2));

    let address = &patient.address[0];
    assert_eq!(address.use_.value(), Some(&AddressUse::Home));
    assert_eq!(address.type_.value(), Some(&AddressType::Both));
    assert_eq!(address.line[0], "534 Erewhon St");
    assert_eq!(address.postal_code.as_str(), Some("3999"));
}

#[test]
fn test_patient_birth_date_extension() {
    let patient: Patient = test_support::decode_fixture("patient-example.json");

    let birth_date = patient.birth_date.as_ref().expect("birthDate");
    assert!(birth_date.has_metadata());
    let birth_time = birth_date
        .extension
        .iter()
        .find(|ext| ext.url == BIRTH_TIME)
        .expect("birth time extension");
    match &birth_time.value {
        Some(ExtensionValue::DateTime(value)) => assert_eq!(
            value.value().map(ToString::to_string),
            Some("1974-12-25T14:35:45-05:00".to_string())
        ),
        other => panic!("unexpected extension value {:?}", other),
    }

    let encoded = JsonCodec::default().encode(&patient);
    assert_eq!(encoded["birthDate"], "1974-12-25");
    assert_eq!(encoded["_birthDate"]["extension"][0]["url"], BIRTH_TIME);
}

#[test]
fn test_patient_contact_family_extension() {
    let patient: Patient = test_support::decode_fixture("patient-example.json");

    let contact = &patient.contact[0];
    assert_eq!(contact.gender.value(), Some(&AdministrativeGender::Female));
    assert!(contact.relationship[0]
        .has_coding("http://terminology.hl7.org/CodeSystem/v2-0131", "N"));

    let name = contact.name.as_ref().expect("contact name");
    let family = name.family.as_ref().expect("family");
    assert_eq!(family, "du Marché");
    match &family.extension[0].value {
        Some(ExtensionValue::String(prefix)) => assert_eq!(prefix, "VV"),
        other => panic!("unexpected extension value {:?}", other),
    }
    assert_eq!(name.given_names().collect::<Vec<_>>(), vec!["Bénédicte"]);
    assert_eq!(
        contact
            .period
            .as_ref()
            .and_then(|period| period.start.value()),
        Some(&DateTime::Date(Date::Year(2012)))
    );
}

#[test]
fn test_patient_aligned_given_names() {
    let patient: Patient =
        test_support::round_trip_fixture("patient-example-aligned-given.json");

    let given = &patient.name[0].given;
    assert_eq!(given.len(), 3);
    assert_eq!(given[0], "Anna");
    assert!(!given[0].has_metadata());

    // slot 1 has metadata but no value
    assert!(given[1].value.is_none());
    assert_eq!(given[1].id.as_deref(), Some("g2"));
    assert!(matches!(
        given[1].extension[0].value,
        Some(ExtensionValue::Code(ref code)) if code == "CL"
    ));
    assert_eq!(given[2], "Marie");

    assert_eq!(patient.name[0].given_names().collect::<Vec<_>>(), vec!["Anna", "Marie"]);
    assert!(matches!(
        patient.multiple_birth,
        Some(PatientMultipleBirth::Integer(ref order)) if order.value() == Some(&2)
    ));
}

#[test]
fn test_patient_gender_metadata_round_trip() {
    let input = serde_json::json!({
        "resourceType": "Patient",
        "id": "gender-ext",
        "gender": "other",
        "_gender": {
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/patient-genderIdentity",
                "valueCodeableConcept": {"text": "non-binary"}
            }]
        }
    });

    let codec = JsonCodec::default();
    let patient: Patient = codec.decode_value(&input).expect("decode");
    let gender = patient.gender.as_ref().expect("gender");
    assert_eq!(gender, &AdministrativeGender::Other);
    assert_eq!(gender.extension.len(), 1);

    let encoded = codec.encode(&patient);
    assert!(ferrum_format::semantically_equal(&input, &encoded));
}

#[test]
fn test_patient_negative_zero_offset_round_trip() {
    let input = serde_json::json!({
        "resourceType": "Patient",
        "id": "unknown-offset",
        "deceasedDateTime": "2015-01-01T10:00:00-00:00"
    });

    let codec = JsonCodec::default();
    let patient: Patient = codec.decode_value(&input).expect("decode");
    let Some(PatientDeceased::DateTime(deceased)) = &patient.deceased else {
        panic!("expected deceasedDateTime");
    };
    assert_eq!(
        deceased.value().map(ToString::to_string).as_deref(),
        Some("2015-01-01T10:00:00-00:00")
    );

    let encoded = codec.encode(&patient);
    assert_eq!(encoded, input);
}
