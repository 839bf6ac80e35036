//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// Service type used by the HTTP layer.
pub type AppMappingService = MappingService<SqliteMappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<AppMappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<AppMappingService>) -> Self {
        Self { mapping_service }
    }
}
