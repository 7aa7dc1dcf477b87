//! Timing and Dosage

use super::{CodeableConcept, Period, Quantity, Range, Ratio};
use crate::primitive::{DateTime, Primitive, Time};
use crate::r4::{DaysOfWeek, UnitsOfTime};
use rust_decimal::Decimal;

fhir_type! {
    /// Specifies an event that may occur multiple times.
    #[derive(Default)]
    pub struct Timing: BackboneElement("Timing") {
        event: repeated Primitive<DateTime> = "event",
        repeat: optional TimingRepeat = "repeat",
        /// BID | TID | QID | AM | PM | QD | QOD | +
        code: optional CodeableConcept = "code",
    }
}

fhir_type! {
    /// When the event is to occur.
    #[derive(Default)]
    pub struct TimingRepeat: ComplexType("Timing.repeat") {
        bounds: choice TimingRepeatBounds = "bounds",
        count: optional Primitive<u32> = "count",
        count_max: optional Primitive<u32> = "countMax",
        duration: optional Primitive<Decimal> = "duration",
        duration_max: optional Primitive<Decimal> = "durationMax",
        duration_unit: optional Primitive<UnitsOfTime> = "durationUnit",
        /// Event occurs frequency times per period
        frequency: optional Primitive<u32> = "frequency",
        frequency_max: optional Primitive<u32> = "frequencyMax",
        period: optional Primitive<Decimal> = "period",
        period_max: optional Primitive<Decimal> = "periodMax",
        period_unit: optional Primitive<UnitsOfTime> = "periodUnit",
        day_of_week: repeated Primitive<DaysOfWeek> = "dayOfWeek",
        time_of_day: repeated Primitive<Time> = "timeOfDay",
        /// Event timing codes (`MORN`, `AC`, ...)
        when: repeated Primitive<String> = "when",
        offset: optional Primitive<u32> = "offset",
    }
}

fhir_choice! {
    pub enum TimingRepeatBounds {
        Duration(Quantity) = "Duration",
        Range(Range) = "Range",
        Period(Period) = "Period",
    }
}

fhir_type! {
    /// How the medication is/was taken or should be taken.
    #[derive(Default)]
    pub struct Dosage: BackboneElement("Dosage") {
        sequence: optional Primitive<i32> = "sequence",
        text: optional Primitive<String> = "text",
        additional_instruction: repeated CodeableConcept = "additionalInstruction",
        patient_instruction: optional Primitive<String> = "patientInstruction",
        timing: optional Timing = "timing",
        /// Take "as needed" (for x)
        as_needed: choice DosageAsNeeded = "asNeeded",
        site: optional CodeableConcept = "site",
        route: optional CodeableConcept = "route",
        method: optional CodeableConcept = "method",
        dose_and_rate: repeated DosageDoseAndRate = "doseAndRate",
        max_dose_per_period: optional Ratio = "maxDosePerPeriod",
        max_dose_per_administration: optional Quantity = "maxDosePerAdministration",
        max_dose_per_lifetime: optional Quantity = "maxDosePerLifetime",
    }
}

fhir_choice! {
    pub enum DosageAsNeeded {
        Boolean(Primitive<bool>) = "Boolean",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
    }
}

fhir_type! {
    /// Amount of medication administered.
    #[derive(Default)]
    pub struct DosageDoseAndRate: ComplexType("Dosage.doseAndRate") {
        type_: optional CodeableConcept = "type",
        dose: choice DosageDose = "dose",
        rate: choice DosageRate = "rate",
    }
}

fhir_choice! {
    pub enum DosageDose {
        Range(Range) = "Range",
        Quantity(Quantity) = "Quantity",
    }
}

fhir_choice! {
    pub enum DosageRate {
        Ratio(Ratio) = "Ratio",
        Range(Range) = "Range",
        Quantity(Quantity) = "Quantity",
    }
}
