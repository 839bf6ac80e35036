//! Repository trait for mapping persistence.

use crate::domain::entities::Mapping;
use crate::domain::error::MappingError;
use async_trait::async_trait;

/// Storage interface for mappings, keyed by code.
///
/// Implementations own code generation and uniqueness. They perform no
/// semantic validation of the URL; callers validate before calling
/// [`MappingRepository::create`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Generates a fresh code, persists `{code, url}` and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Storage`] if persistence fails and
    /// [`MappingError::CodeExhausted`] if no unused code could be generated.
    async fn create(&self, url: &str) -> Result<Mapping, MappingError>;

    /// Looks up the mapping stored under `code`.
    ///
    /// # Errors
    ///
    /// - [`MappingError::InvalidCode`] if `code` is not a well-formed identifier
    /// - [`MappingError::NotFound`] if no record has that code
    /// - [`MappingError::Storage`] on database errors
    async fn find_by_code(&self, code: &str) -> Result<Mapping, MappingError>;

    /// Permanently removes the mapping stored under `code`.
    ///
    /// Shares the error semantics of [`MappingRepository::find_by_code`]. When
    /// several callers race to delete the same code exactly one succeeds and
    /// the others get [`MappingError::NotFound`].
    async fn delete_by_code(&self, code: &str) -> Result<(), MappingError>;

    /// Returns true if the backing engine answers a trivial query.
    async fn health_check(&self) -> bool;
}
