use crate::primitive::{Instant, Primitive};
use crate::r4::{BundleType, HttpVerb, Identifier, Resource, SearchEntryMode, Signature};
use rust_decimal::Decimal;

fhir_type! {
    /// A container for a collection of resources.
    #[derive(Default)]
    pub struct Bundle: Resource("Bundle") {
        /// Persistent identifier for the bundle
        identifier: optional Identifier = "identifier",
        type_: required Primitive<BundleType> = "type",
        /// When the bundle was assembled
        timestamp: optional Primitive<Instant> = "timestamp",
        /// If search, the total number of matches
        total: optional Primitive<u32> = "total",
        link: repeated BundleLink = "link",
        entry: repeated BundleEntry = "entry",
        signature: optional Signature = "signature",
    }
}

impl Bundle {
    /// Resources of the entries, in entry order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry.iter().filter_map(|entry| entry.resource.as_ref())
    }
}

fhir_type! {
    /// Links related to this Bundle or entry.
    #[derive(Default)]
    pub struct BundleLink: BackboneElement("Bundle.link") {
        relation: required Primitive<String> = "relation",
        url: required Primitive<String> = "url",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct BundleEntry: BackboneElement("Bundle.entry") {
        link: repeated BundleLink = "link",
        /// URI for resource (Absolute URL server address or URI for UUID/OID)
        full_url: optional Primitive<String> = "fullUrl",
        resource: optional Resource = "resource",
        search: optional BundleEntrySearch = "search",
        request: optional BundleEntryRequest = "request",
        response: optional BundleEntryResponse = "response",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct BundleEntrySearch: BackboneElement("Bundle.entry.search") {
        mode: optional Primitive<SearchEntryMode> = "mode",
        score: optional Primitive<Decimal> = "score",
    }
}

fhir_type! {
    /// Additional execution information (transaction/batch/history).
    #[derive(Default)]
    pub struct BundleEntryRequest: BackboneElement("Bundle.entry.request") {
        method: required Primitive<HttpVerb> = "method",
        url: required Primitive<String> = "url",
        if_none_match: optional Primitive<String> = "ifNoneMatch",
        if_modified_since: optional Primitive<Instant> = "ifModifiedSince",
        if_match: optional Primitive<String> = "ifMatch",
        if_none_exist: optional Primitive<String> = "ifNoneExist",
    }
}

fhir_type! {
    #[derive(Default)]
    pub struct BundleEntryResponse: BackboneElement("Bundle.entry.response") {
        status: required Primitive<String> = "status",
        location: optional Primitive<String> = "location",
        etag: optional Primitive<String> = "etag",
        last_modified: optional Primitive<Instant> = "lastModified",
        /// OperationOutcome with hints and warnings (for batch/transaction)
        outcome: optional Resource = "outcome",
    }
}
