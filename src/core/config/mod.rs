pub mod endpoint_entity;
pub mod endpoint_env_adapter;
pub mod endpoint_repository;

pub use endpoint_entity::EndpointDescriptor;
pub use endpoint_repository::{EndpointApiRepository, EndpointRepository};
