//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Random code generation and parsing
//! - [`url_validator`] - Syntactic URL validation

pub mod code_generator;
pub mod url_validator;
