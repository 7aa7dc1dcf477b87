//! Required-binding code systems used by the R4 model
//!
//! Fields bound to these value sets decode only known codes; anything else is
//! rejected as an invalid value.

fhir_code! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus("http://hl7.org/fhir/narrative-status") {
        Generated = "generated",
        Extensions = "extensions",
        Additional = "additional",
        Empty = "empty",
    }
}

fhir_code! {
    /// The gender of a person used for administrative purposes.
    pub enum AdministrativeGender("http://hl7.org/fhir/administrative-gender") {
        Male = "male",
        Female = "female",
        Other = "other",
        Unknown = "unknown",
    }
}

fhir_code! {
    pub enum IdentifierUse("http://hl7.org/fhir/identifier-use") {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
        Old = "old",
    }
}

fhir_code! {
    pub enum NameUse("http://hl7.org/fhir/name-use") {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Nickname = "nickname",
        Anonymous = "anonymous",
        Old = "old",
        Maiden = "maiden",
    }
}

fhir_code! {
    pub enum AddressUse("http://hl7.org/fhir/address-use") {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Billing = "billing",
    }
}

fhir_code! {
    pub enum AddressType("http://hl7.org/fhir/address-type") {
        Postal = "postal",
        Physical = "physical",
        Both = "both",
    }
}

fhir_code! {
    pub enum ContactPointSystem("http://hl7.org/fhir/contact-point-system") {
        Phone = "phone",
        Fax = "fax",
        Email = "email",
        Pager = "pager",
        Url = "url",
        Sms = "sms",
        Other = "other",
    }
}

fhir_code! {
    pub enum ContactPointUse("http://hl7.org/fhir/contact-point-use") {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Mobile = "mobile",
    }
}

fhir_code! {
    /// How the value of a quantity should be understood.
    pub enum QuantityComparator("http://hl7.org/fhir/quantity-comparator") {
        LessThan = "<",
        LessOrEqual = "<=",
        GreaterOrEqual = ">=",
        GreaterThan = ">",
    }
}

fhir_code! {
    pub enum UnitsOfTime("http://unitsofmeasure.org") {
        Second = "s",
        Minute = "min",
        Hour = "h",
        Day = "d",
        Week = "wk",
        Month = "mo",
        Year = "a",
    }
}

fhir_code! {
    pub enum DaysOfWeek("http://hl7.org/fhir/days-of-week") {
        Mon = "mon",
        Tue = "tue",
        Wed = "wed",
        Thu = "thu",
        Fri = "fri",
        Sat = "sat",
        Sun = "sun",
    }
}

fhir_code! {
    /// The type of link between a patient and another patient or related person.
    pub enum LinkType("http://hl7.org/fhir/link-type") {
        ReplacedBy = "replaced-by",
        Replaces = "replaces",
        Refer = "refer",
        SeeAlso = "seealso",
    }
}

fhir_code! {
    pub enum GroupType("http://hl7.org/fhir/group-type") {
        Person = "person",
        Animal = "animal",
        Practitioner = "practitioner",
        Device = "device",
        Medication = "medication",
        Substance = "substance",
    }
}

fhir_code! {
    pub enum AllergyIntoleranceType("http://hl7.org/fhir/allergy-intolerance-type") {
        Allergy = "allergy",
        Intolerance = "intolerance",
    }
}

fhir_code! {
    pub enum AllergyIntoleranceCategory("http://hl7.org/fhir/allergy-intolerance-category") {
        Food = "food",
        Medication = "medication",
        Environment = "environment",
        Biologic = "biologic",
    }
}

fhir_code! {
    pub enum AllergyIntoleranceCriticality("http://hl7.org/fhir/allergy-intolerance-criticality") {
        Low = "low",
        High = "high",
        UnableToAssess = "unable-to-assess",
    }
}

fhir_code! {
    pub enum AllergyIntoleranceSeverity("http://hl7.org/fhir/reaction-event-severity") {
        Mild = "mild",
        Moderate = "moderate",
        Severe = "severe",
    }
}

fhir_code! {
    pub enum AppointmentStatus("http://hl7.org/fhir/appointmentstatus") {
        Proposed = "proposed",
        Pending = "pending",
        Booked = "booked",
        Arrived = "arrived",
        Fulfilled = "fulfilled",
        Cancelled = "cancelled",
        NoShow = "noshow",
        EnteredInError = "entered-in-error",
        CheckedIn = "checked-in",
        Waitlist = "waitlist",
    }
}

fhir_code! {
    pub enum ParticipantRequired("http://hl7.org/fhir/participantrequired") {
        Required = "required",
        Optional = "optional",
        InformationOnly = "information-only",
    }
}

fhir_code! {
    pub enum ParticipationStatus("http://hl7.org/fhir/participationstatus") {
        Accepted = "accepted",
        Declined = "declined",
        Tentative = "tentative",
        NeedsAction = "needs-action",
    }
}

fhir_code! {
    pub enum ObservationStatus("http://hl7.org/fhir/observation-status") {
        Registered = "registered",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code! {
    pub enum MedicationStatus("http://hl7.org/fhir/CodeSystem/medication-status") {
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_code! {
    pub enum MedicationStatementStatus("http://hl7.org/fhir/CodeSystem/medication-statement-status") {
        Active = "active",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Intended = "intended",
        Stopped = "stopped",
        OnHold = "on-hold",
        Unknown = "unknown",
        NotTaken = "not-taken",
    }
}

fhir_code! {
    /// Indicates the purpose of a bundle.
    pub enum BundleType("http://hl7.org/fhir/bundle-type") {
        Document = "document",
        Message = "message",
        Transaction = "transaction",
        TransactionResponse = "transaction-response",
        Batch = "batch",
        BatchResponse = "batch-response",
        History = "history",
        Searchset = "searchset",
        Collection = "collection",
    }
}

fhir_code! {
    pub enum SearchEntryMode("http://hl7.org/fhir/search-entry-mode") {
        Match = "match",
        Include = "include",
        Outcome = "outcome",
    }
}

fhir_code! {
    pub enum HttpVerb("http://hl7.org/fhir/http-verb") {
        Get = "GET",
        Head = "HEAD",
        Post = "POST",
        Put = "PUT",
        Delete = "DELETE",
        Patch = "PATCH",
    }
}
