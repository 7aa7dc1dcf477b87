//! RelatedPerson examples

use ferrum_r4_models::primitive::Date;
use ferrum_r4_models::r4::{AdministrativeGender, ExtensionValue, RelatedPerson};
use ferrum_r4_models::{PrimitiveField, StringField};

mod test_support;

#[test]
fn test_related_person_benedicte() {
    let person: RelatedPerson = test_support::round_trip_fixture("relatedperson-example.json");

    assert_eq!(person.id.as_str(), Some("benedicte"));
    assert_eq!(person.gender.value(), Some(&AdministrativeGender::Female));
    assert_eq!(person.patient.reference.as_str(), Some("Patient/example"));
    assert_eq!(person.identifier[0].value.as_str(), Some("272117510400399"));

    let relationship = &person.relationship[0];
    assert_eq!(relationship.coding.len(), 2);
    assert!(relationship.has_coding("http://terminology.hl7.org/CodeSystem/v3-RoleCode", "WIFE"));

    let family = person.name[0].family.as_ref().expect("family");
    assert_eq!(family, "du Marché");
    assert!(matches!(
        family.extension[0].value,
        Some(ExtensionValue::String(ref prefix)) if prefix == "VV"
    ));

    assert_eq!(person.address[0].city.as_str(), Some("Paris"));
    assert_eq!(person.address[0].country.as_str(), Some("FRA"));
    assert_eq!(person.photo[0].content_type.as_str(), Some("image/jpeg"));
    assert_eq!(person.photo[0].url.as_str(), Some("Binary/f016"));
}

#[test]
fn test_related_person_peter() {
    let person: RelatedPerson =
        test_support::round_trip_fixture("relatedperson-example-peter.json");

    assert_eq!(person.id.as_str(), Some("peter"));
    assert_eq!(person.gender.value(), Some(&AdministrativeGender::Male));
    assert_eq!(person.patient.reference.as_str(), Some("Patient/animal"));
    assert_eq!(
        person.birth_date.value(),
        Some(&Date::from_ymd(1974, 12, 25).expect("valid date"))
    );
    assert_eq!(person.name[0].family.as_str(), Some("Chalmers"));
    assert_eq!(
        person
            .period
            .as_ref()
            .and_then(|period| period.start.value())
            .map(ToString::to_string),
        Some("2012-03-11".to_string())
    );
}
