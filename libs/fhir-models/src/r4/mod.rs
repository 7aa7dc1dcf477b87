//! FHIR R4 data types and resources

#[macro_use]
mod macros;

mod codes;
mod datatypes;
mod resource;
mod resources;

pub use codes::*;
pub use datatypes::*;
pub use resource::{Resource, ResourceType, RESOURCE_TYPES};
pub use resources::*;
