//! # URL Mapper
//!
//! Maps long URLs to random UUID codes and resolves codes back through an
//! HTTP `301` redirect. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Mapping` entity, error taxonomy and store trait
//! - **Application Layer** ([`application`]) - URL validation and mapping lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## HTTP Surface
//!
//! | Method | Path      | Success                 | Failure |
//! |--------|-----------|-------------------------|---------|
//! | POST   | `/`       | 201 `{"code","url"}`    | 409     |
//! | GET    | `/{code}` | 301 to the stored URL   | 404     |
//! | DELETE | `/{code}` | 204                     | 404     |
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://url-mapper.db"
//! cargo run
//! curl -X POST localhost:1337/ -H 'Content-Type: application/json' \
//!     -d '{"url":"https://news.ycombinator.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingService;
    pub use crate::domain::MappingError;
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
