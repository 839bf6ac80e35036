//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - Mapping storage, lookup and deletion

pub mod db_error;
pub mod pool;
pub mod sqlite_mapping_repository;

pub use pool::{connect_pool, is_in_memory};
pub use sqlite_mapping_repository::{CodeGenerator, MAX_CODE_ATTEMPTS, SqliteMappingRepository};
