//! Error taxonomy shared by the mapping store and the mapping service.

use thiserror::Error;

/// Errors surfaced by mapping operations.
///
/// Every variant is propagated unchanged from the store through the service;
/// nothing is retried automatically.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The URL given at creation time is not a valid absolute URL.
    #[error("invalid url: {0}")]
    Validation(String),

    /// The code given to find/delete is not a well-formed identifier.
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// No mapping exists for a well-formed code.
    #[error("mapping not found: {0}")]
    NotFound(String),

    /// The storage engine failed to complete the operation.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Every generated code collided with an existing one.
    #[error("could not generate a unique code after {0} attempts")]
    CodeExhausted(usize),
}

impl MappingError {
    /// Returns true for failures of the backing engine rather than of the input.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::CodeExhausted(_))
    }
}
