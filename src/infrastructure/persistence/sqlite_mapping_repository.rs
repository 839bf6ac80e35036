//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::db_error::is_unique_violation_on_code;
use crate::domain::MappingError;
use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::{generate_code, parse_code};
use uuid::Uuid;

/// Number of codes tried before giving up on a create.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Source of fresh codes for [`SqliteMappingRepository::create`].
pub type CodeGenerator = Arc<dyn Fn() -> Uuid + Send + Sync>;

/// SQLite repository for mappings.
///
/// Uniqueness of codes is enforced by the table's primary key. Every
/// operation is a single statement, so no application-level locking is
/// needed.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
    generator: CodeGenerator,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool and random v4 codes.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self::with_generator(pool, Arc::new(generate_code))
    }

    /// Creates a repository drawing codes from `generator`.
    pub fn with_generator(pool: Arc<SqlitePool>, generator: CodeGenerator) -> Self {
        Self { pool, generator }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn create(&self, url: &str) -> Result<Mapping, MappingError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = (self.generator)();

            let result = sqlx::query("INSERT INTO mappings (code, url) VALUES (?1, ?2)")
                .bind(code)
                .bind(url)
                .execute(self.pool.as_ref())
                .await;

            match result {
                Ok(_) => {
                    tracing::debug!(%code, url, "mapping stored");
                    return Ok(Mapping::new(code, url));
                }
                Err(e) if is_unique_violation_on_code(&e) => {
                    tracing::warn!(%code, attempt, "generated code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(MappingError::CodeExhausted(MAX_CODE_ATTEMPTS))
    }

    async fn find_by_code(&self, code: &str) -> Result<Mapping, MappingError> {
        let id = parse_code(code)?;

        sqlx::query_as::<_, Mapping>("SELECT code, url FROM mappings WHERE code = ?1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| MappingError::NotFound(id.to_string()))
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), MappingError> {
        let mapping = self.find_by_code(code).await?;

        let result = sqlx::query("DELETE FROM mappings WHERE code = ?1")
            .bind(mapping.code)
            .execute(self.pool.as_ref())
            .await?;

        // Another request removed the row between the lookup and the delete.
        if result.rows_affected() == 0 {
            return Err(MappingError::NotFound(mapping.code.to_string()));
        }

        tracing::debug!(code = %mapping.code, "mapping removed");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
