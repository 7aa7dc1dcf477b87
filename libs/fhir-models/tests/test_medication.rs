//! Medication and MedicationStatement examples with contained resources

use ferrum_r4_models::r4::{
    DosageAsNeeded, DosageDose, Medication, MedicationIngredientItem, MedicationStatement,
    MedicationStatementEffective, MedicationStatementMedication, MedicationStatementStatus,
    Organization, UnitsOfTime,
};
use ferrum_r4_models::{PrimitiveField, StringField};
use rust_decimal::Decimal;

mod test_support;

#[test]
fn test_medication_example_0307() {
    let medication: Medication = test_support::round_trip_fixture("medicationexample0307.json");

    assert_eq!(medication.id.as_str(), Some("med0307"));
    assert_eq!(
        medication
            .manufacturer
            .as_ref()
            .and_then(|manufacturer| manufacturer.reference.as_str()),
        Some("#org3")
    );

    assert_eq!(medication.contained.len(), 1);
    let org = medication.contained[0]
        .downcast_ref::<Organization>()
        .expect("contained organization");
    assert_eq!(org.id.as_str(), Some("org3"));
    assert_eq!(medication.contained[0].id(), Some("org3"));

    let code = medication.code.as_ref().expect("code");
    assert_eq!(code.coding[0].code.as_str(), Some("0169-7501-11"));
    assert_eq!(code.coding[0].display.as_str(), Some("Novolog 100u/ml"));
    assert!(medication
        .form
        .as_ref()
        .is_some_and(|form| form.has_coding("http://snomed.info/sct", "385219001")));

    let ingredient = &medication.ingredient[0];
    match &ingredient.item {
        MedicationIngredientItem::CodeableConcept(item) => {
            assert!(item.has_coding("http://snomed.info/sct", "325072002"))
        }
        other => panic!("unexpected ingredient item {:?}", other),
    }
    let strength = ingredient.strength.as_ref().expect("strength");
    let numerator = strength.numerator.as_ref().expect("numerator");
    assert_eq!(numerator.value.value(), Some(&Decimal::from(100)));
    assert_eq!(numerator.code.as_str(), Some("U"));
    let denominator = strength.denominator.as_ref().expect("denominator");
    assert_eq!(denominator.value.value(), Some(&Decimal::ONE));
    assert_eq!(denominator.code.as_str(), Some("mL"));

    let batch = medication.batch.as_ref().expect("batch");
    assert_eq!(batch.lot_number.as_str(), Some("12345"));
    assert_eq!(
        batch.expiration_date.value().map(ToString::to_string),
        Some("2019-10-31".to_string())
    );
}

#[test]
fn test_medication_statement_example_1() {
    let statement: MedicationStatement =
        test_support::round_trip_fixture("medicationstatementexample1.json");

    assert_eq!(statement.id.as_str(), Some("example001"));
    assert_eq!(statement.status, MedicationStatementStatus::Active);
    assert!(matches!(
        statement.medication,
        MedicationStatementMedication::Reference(ref medication)
            if medication.reference.as_str() == Some("#med0309")
    ));
    assert!(matches!(
        statement.effective,
        Some(MedicationStatementEffective::DateTime(_))
    ));
    assert_eq!(statement.subject.display.as_str(), Some("Donald Duck"));
    assert_eq!(
        statement.date_asserted.value().map(ToString::to_string),
        Some("2015-02-22".to_string())
    );
    assert_eq!(
        statement.note[0].text,
        "Patient indicates they miss the occasional dose"
    );

    let contained = statement.contained[0]
        .downcast_ref::<Medication>()
        .expect("contained medication");
    assert_eq!(contained.id.as_str(), Some("med0309"));
    assert_eq!(
        contained
            .batch
            .as_ref()
            .and_then(|batch| batch.lot_number.as_str()),
        Some("9494788")
    );
}

#[test]
fn test_medication_statement_dosage() {
    let statement: MedicationStatement =
        test_support::decode_fixture("medicationstatementexample1.json");

    let dosage = &statement.dosage[0];
    assert_eq!(dosage.sequence.value(), Some(&1));
    assert_eq!(dosage.additional_instruction[0].text.as_str(), Some("Taking at bedtime"));
    assert!(matches!(
        dosage.as_needed,
        Some(DosageAsNeeded::CodeableConcept(ref reason))
            if reason.has_coding("http://snomed.info/sct", "32914008")
    ));

    let repeat = dosage
        .timing
        .as_ref()
        .and_then(|timing| timing.repeat.as_ref())
        .expect("timing repeat");
    assert_eq!(repeat.frequency.value(), Some(&1));
    assert_eq!(repeat.period.value(), Some(&Decimal::ONE));
    assert_eq!(repeat.period_unit.value(), Some(&UnitsOfTime::Day));

    let dose_and_rate = &dosage.dose_and_rate[0];
    match &dose_and_rate.dose {
        Some(DosageDose::Range(range)) => {
            let low = range.low.as_ref().and_then(|low| low.value.value());
            let high = range.high.as_ref().and_then(|high| high.value.value());
            assert_eq!(low, Some(&Decimal::from(1)));
            assert_eq!(high, Some(&Decimal::from(2)));
        }
        other => panic!("unexpected dose {:?}", other),
    }
}
