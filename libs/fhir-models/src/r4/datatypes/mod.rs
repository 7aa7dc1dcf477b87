//! R4 data types

mod element;
mod general;
mod timing;

pub use element::{Extension, ExtensionValue, Meta, Narrative};
pub use general::{
    Address, Age, Annotation, AnnotationAuthor, Attachment, CodeableConcept, Coding, ContactPoint,
    Count, Distance, Duration, HumanName, Identifier, Money, Period, Quantity, Range, Ratio,
    Reference, Signature, SimpleQuantity,
};
pub use timing::{
    Dosage, DosageAsNeeded, DosageDose, DosageDoseAndRate, DosageRate, Timing, TimingRepeat,
    TimingRepeatBounds,
};
