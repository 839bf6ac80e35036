//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Create, find and delete mappings by code
//!
//! See integration tests in `tests/repository_mapping.rs` for usage examples.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
