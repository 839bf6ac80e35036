//! Mapping creation, resolution and deactivation service.

use std::sync::Arc;

use crate::domain::MappingError;
use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::utils::url_validator::validate_url;

/// Service enforcing the URL validity policy in front of the mapping store.
///
/// Store errors are logged and returned unchanged.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates `raw_url` and stores a new mapping for it.
    ///
    /// The URL is persisted exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Validation`] without touching the store if the
    /// URL is not a valid absolute URL. Store errors are forwarded.
    pub async fn create_mapping(&self, raw_url: &str) -> Result<Mapping, MappingError> {
        if let Err(e) = validate_url(raw_url) {
            tracing::warn!(url = raw_url, error = %e, "rejected url");
            return Err(MappingError::Validation(e.to_string()));
        }

        match self.repository.create(raw_url).await {
            Ok(mapping) => {
                tracing::info!(code = %mapping.code, url = %mapping.url, "mapping created");
                Ok(mapping)
            }
            Err(e) => {
                tracing::error!(error = %e, "could not create mapping");
                Err(e)
            }
        }
    }

    /// Looks up the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Forwards [`MappingError::InvalidCode`], [`MappingError::NotFound`] and
    /// storage errors from the store.
    pub async fn resolve_mapping(&self, code: &str) -> Result<Mapping, MappingError> {
        self.repository
            .find_by_code(code)
            .await
            .inspect(|mapping| tracing::debug!(code = %mapping.code, "mapping resolved"))
            .inspect_err(|e| log_lookup_failure("resolve", code, e))
    }

    /// Permanently deletes the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve_mapping`].
    pub async fn deactivate_mapping(&self, code: &str) -> Result<(), MappingError> {
        self.repository
            .delete_by_code(code)
            .await
            .inspect(|_| tracing::info!(code, "mapping deleted"))
            .inspect_err(|e| log_lookup_failure("delete", code, e))
    }

    /// Returns true if the store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

fn log_lookup_failure(operation: &str, code: &str, error: &MappingError) {
    if error.is_storage() {
        tracing::error!(operation, code, error = %error, "storage failure");
    } else {
        tracing::debug!(operation, code, error = %error, "lookup failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockMappingRepository;
    use uuid::Uuid;

    const CODE: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    fn test_mapping(url: &str) -> Mapping {
        Mapping::new(Uuid::parse_str(CODE).unwrap(), url)
    }

    #[tokio::test]
    async fn test_create_mapping_success() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_create()
            .withf(|url: &str| url == "https://example.com/path")
            .times(1)
            .returning(|url| Ok(test_mapping(url)));

        let service = MappingService::new(Arc::new(mock_repo));

        let mapping = service
            .create_mapping("https://example.com/path")
            .await
            .unwrap();

        assert_eq!(mapping.url, "https://example.com/path");
        assert_eq!(mapping.code_string(), CODE);
    }

    #[tokio::test]
    async fn test_create_mapping_keeps_url_verbatim() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_create()
            .withf(|url: &str| url == "HTTPS://Example.COM:443/Path#frag")
            .times(1)
            .returning(|url| Ok(test_mapping(url)));

        let service = MappingService::new(Arc::new(mock_repo));

        let mapping = service
            .create_mapping("HTTPS://Example.COM:443/Path#frag")
            .await
            .unwrap();

        assert_eq!(mapping.url, "HTTPS://Example.COM:443/Path#frag");
    }

    #[tokio::test]
    async fn test_create_mapping_invalid_url_skips_store() {
        for input in ["", "not a url", ":\\//aa.ww.http"] {
            let mut mock_repo = MockMappingRepository::new();
            mock_repo.expect_create().times(0);

            let service = MappingService::new(Arc::new(mock_repo));
            let result = service.create_mapping(input).await;

            assert!(
                matches!(result, Err(MappingError::Validation(_))),
                "expected Validation for {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_create_mapping_forwards_storage_error() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(MappingError::Storage(sqlx::Error::PoolTimedOut)));

        let service = MappingService::new(Arc::new(mock_repo));
        let result = service.create_mapping("https://example.com").await;

        assert!(matches!(result, Err(MappingError::Storage(_))));
    }

    #[tokio::test]
    async fn test_resolve_mapping_success() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code: &str| code == CODE)
            .times(1)
            .returning(|_| Ok(test_mapping("https://news.ycombinator.com")));

        let service = MappingService::new(Arc::new(mock_repo));
        let mapping = service.resolve_mapping(CODE).await.unwrap();

        assert_eq!(mapping.url, "https://news.ycombinator.com");
    }

    #[tokio::test]
    async fn test_resolve_mapping_propagates_errors() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code: &str| code == "not-a-valid-id")
            .returning(|code| Err(MappingError::InvalidCode(code.to_string())));
        mock_repo
            .expect_find_by_code()
            .withf(|code: &str| code == CODE)
            .returning(|code| Err(MappingError::NotFound(code.to_string())));

        let service = MappingService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.resolve_mapping("not-a-valid-id").await,
            Err(MappingError::InvalidCode(_))
        ));
        assert!(matches!(
            service.resolve_mapping(CODE).await,
            Err(MappingError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_deactivate_mapping_success() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_delete_by_code()
            .withf(|code: &str| code == CODE)
            .times(1)
            .returning(|_| Ok(()));

        let service = MappingService::new(Arc::new(mock_repo));

        assert!(service.deactivate_mapping(CODE).await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_mapping_not_found() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_delete_by_code()
            .times(1)
            .returning(|code| Err(MappingError::NotFound(code.to_string())));

        let service = MappingService::new(Arc::new(mock_repo));
        let result = service.deactivate_mapping(CODE).await;

        assert!(matches!(result, Err(MappingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_is_healthy() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_health_check().times(1).returning(|| false);

        let service = MappingService::new(Arc::new(mock_repo));

        assert!(!service.is_healthy().await);
    }
}
