//! HTTP request handlers for API endpoints.

pub mod health;
pub mod mappings;

pub use health::health_handler;
pub use mappings::{create_mapping_handler, delete_mapping_handler, redirect_handler};
