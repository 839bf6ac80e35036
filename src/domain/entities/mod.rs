//! Core domain entities.
//!
//! - [`Mapping`] - A persisted `(code, url)` pair

pub mod mapping;

pub use mapping::Mapping;
