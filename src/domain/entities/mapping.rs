//! Mapping entity representing a short code bound to a long URL.

use serde::Serialize;
use uuid::Uuid;

/// A stored mapping between a generated code and the original URL.
///
/// Both fields are immutable once persisted. Several mappings may point at
/// the same URL; no two mappings ever share a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Mapping {
    pub code: Uuid,
    pub url: String,
}

impl Mapping {
    pub fn new(code: Uuid, url: impl Into<String>) -> Self {
        Self {
            code,
            url: url.into(),
        }
    }

    /// Canonical textual form of the code (lowercase, hyphenated).
    pub fn code_string(&self) -> String {
        self.code.hyphenated().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let code = Uuid::new_v4();
        let mapping = Mapping::new(code, "https://example.com");

        assert_eq!(mapping.code, code);
        assert_eq!(mapping.url, "https://example.com");
    }

    #[test]
    fn test_code_string_is_hyphenated() {
        let code = Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        let mapping = Mapping::new(code, "https://example.com");

        assert_eq!(mapping.code_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_serializes_code_as_string() {
        let code = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let json = serde_json::to_value(Mapping::new(code, "https://example.com")).unwrap();

        assert_eq!(json["code"], "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(json["url"], "https://example.com");
    }
}
