//! DTOs for mapping endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Mapping;

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct CreateMappingRequest {
    pub url: String,
}

/// Body returned after a mapping is created.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingResponse {
    pub code: String,
    pub url: String,
}

impl From<Mapping> for MappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            code: mapping.code_string(),
            url: mapping.url,
        }
    }
}
