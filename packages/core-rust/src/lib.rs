//! CSV onboarding core: request, catalog descriptors, descriptor builder, and results.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod properties;
pub mod request;
pub mod result;

pub use builder::DescriptorBuilder;
pub use descriptor::{
    AssetDescriptor, AssetGraph, ConnectionDescriptor, ConnectorTypeDescriptor,
    EndpointDescriptor, SchemaAttribute, SchemaDescriptor,
};
pub use error::StoreError;
pub use identity::CatalogIdentities;
pub use properties::{PropertyMap, PropertyValue};
pub use request::OnboardingRequest;
pub use result::{ConflictingOutcome, ErrorKind, OnboardingError, OnboardingResult};
