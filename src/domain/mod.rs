//! Domain layer containing the mapping entity, its error taxonomy and the
//! storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`error`] - Errors surfaced by the store and the service
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no knowledge of HTTP. Status codes are chosen by the
//! API layer (see [`crate::error::AppError`]).

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::MappingError;
