//! Condition example with onset and abatement choices

use ferrum_r4_models::primitive::{Date, DateTime};
use ferrum_r4_models::r4::{Condition, ConditionAbatement, ConditionOnset};
use ferrum_r4_models::{PrimitiveField, StringField};

mod test_support;

#[test]
fn test_condition_f201_fever() {
    let condition: Condition = test_support::round_trip_fixture("condition-example-f201-fever.json");

    assert_eq!(condition.id.as_str(), Some("f201"));
    assert_eq!(condition.identifier[0].value.as_str(), Some("12345"));
    assert!(condition.clinical_status.as_ref().is_some_and(|status| status.has_coding(
        "http://terminology.hl7.org/CodeSystem/condition-clinical",
        "resolved"
    )));
    assert_eq!(condition.category[0].coding.len(), 2);
    assert!(condition
        .code
        .as_ref()
        .is_some_and(|code| code.has_coding("http://snomed.info/sct", "386661006")));
    assert_eq!(condition.subject.reference.as_str(), Some("Patient/f201"));
    assert_eq!(condition.subject.display.as_str(), Some("Roel"));

    assert!(matches!(
        condition.onset,
        Some(ConditionOnset::DateTime(ref onset))
            if onset.value() == Some(&DateTime::Date(Date::from_ymd(2013, 4, 2).unwrap()))
    ));
    match &condition.abatement {
        Some(ConditionAbatement::String(abatement)) => {
            assert_eq!(abatement, "around April 9, 2013")
        }
        other => panic!("unexpected abatement {:?}", other),
    }
    assert_eq!(
        condition.recorded_date.value().map(ToString::to_string),
        Some("2013-04-04".to_string())
    );

    let evidence = &condition.evidence[0];
    assert!(evidence.code[0].has_coding("http://snomed.info/sct", "258710007"));
    assert_eq!(evidence.detail[0].reference.as_str(), Some("Observation/f202"));
    assert_eq!(evidence.detail[0].display.as_str(), Some("Temperature"));
}
