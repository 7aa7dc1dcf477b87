//! Group examples: plain members, characteristics and extensions

use ferrum_r4_models::r4::{
    ExtensionValue, Group, GroupCharacteristicValue, GroupType, NarrativeStatus,
};
use ferrum_r4_models::{PrimitiveField, StringField};

mod test_support;

#[test]
fn test_group_example_herd() {
    let group: Group = test_support::round_trip_fixture("group-example.json");

    assert_eq!(group.id.as_str(), Some("101"));
    assert_eq!(group.type_, GroupType::Animal);
    assert_eq!(group.actual.value(), Some(&true));
    assert_eq!(group.quantity.value(), Some(&25));
    assert_eq!(group.name.as_str(), Some("John's herd"));
    assert_eq!(
        group.code.as_ref().and_then(|code| code.text.as_str()),
        Some("Horse")
    );
    assert_eq!(group.identifier[0].value.as_str(), Some("12345"));

    let meta = group.meta.as_ref().expect("meta");
    assert_eq!(meta.tag[0].code.as_str(), Some("HTEST"));
    assert_eq!(
        group.text.as_ref().expect("text").status,
        NarrativeStatus::Additional
    );

    assert_eq!(group.characteristic.len(), 2);
    let gender = &group.characteristic[0];
    assert_eq!(gender.code.text.as_str(), Some("gender"));
    assert_eq!(gender.exclude.value(), Some(&false));
    match &gender.value {
        GroupCharacteristicValue::CodeableConcept(value) => {
            assert_eq!(value.text.as_str(), Some("mixed"))
        }
        other => panic!("unexpected characteristic value {:?}", other),
    }
    assert_eq!(group.characteristic[1].code.text.as_str(), Some("owner"));
}

#[test]
fn test_group_example_member() {
    let group: Group = test_support::round_trip_fixture("group-example-member.json");

    assert_eq!(group.id.as_str(), Some("102"));
    assert_eq!(group.type_, GroupType::Person);
    assert_eq!(group.actual.value(), Some(&true));
    assert_eq!(group.member.len(), 4);

    let entities: Vec<_> = group
        .member
        .iter()
        .filter_map(|member| member.entity.reference.as_str())
        .collect();
    assert_eq!(
        entities,
        vec!["Patient/pat1", "Patient/pat2", "Patient/pat3", "Patient/pat4"]
    );

    let second = &group.member[1];
    assert_eq!(second.inactive.value(), Some(&true));
    assert_eq!(
        second
            .period
            .as_ref()
            .and_then(|period| period.start.value())
            .map(ToString::to_string),
        Some("2015-04-02".to_string())
    );
    assert!(group.member[0].inactive.is_none());
}

#[test]
fn test_group_example_herd1() {
    let group: Group = test_support::round_trip_fixture("group-example-herd1.json");

    assert_eq!(group.id.as_str(), Some("herd1"));
    assert_eq!(group.active.value(), Some(&true));
    assert_eq!(group.quantity.value(), Some(&2500));
    assert_eq!(group.name.as_str(), Some("Breeding herd"));

    let code = group.code.as_ref().expect("code");
    assert_eq!(code.coding.len(), 2);
    assert!(code.has_coding("http://snomed.info/sct", "388393002"));
    assert_eq!(code.text.as_str(), Some("Porcine"));

    assert_eq!(group.extension.len(), 1);
    match &group.extension[0].value {
        Some(ExtensionValue::Reference(reference)) => {
            assert_eq!(reference.reference.as_str(), Some("RelatedPerson/peter"));
            assert_eq!(reference.display.as_str(), Some("Peter Chalmers"));
        }
        other => panic!("unexpected extension value {:?}", other),
    }
}
