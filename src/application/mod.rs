//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - URL validation and mapping lifecycle

pub mod services;
