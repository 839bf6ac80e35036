//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations and the Axum server lifecycle.

use crate::application::services::MappingService;
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteMappingRepository, connect_pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the database described by `config` and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn prepare_database(config: &Config) -> Result<SqlitePool> {
    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Wires the repository and service into handler state.
pub fn build_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(MappingService::new(repository)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = prepare_database(&config).await?;
    let state = build_state(pool.clone());

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
