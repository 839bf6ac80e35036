#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use url_mapper::application::services::MappingService;
use url_mapper::infrastructure::persistence::SqliteMappingRepository;
use url_mapper::routes::app_router;
use url_mapper::state::AppState;
use uuid::Uuid;

pub fn create_test_service(pool: SqlitePool) -> MappingService<SqliteMappingRepository> {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    MappingService::new(repository)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_service(pool)))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = app_router(create_test_state(pool), Duration::from_secs(15));
    TestServer::new(app).unwrap()
}

/// Seeds a mapping with a known code, bypassing the service.
pub async fn create_test_mapping(pool: &SqlitePool, url: &str) -> Uuid {
    let code = Uuid::new_v4();

    sqlx::query("INSERT INTO mappings (code, url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();

    code
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
