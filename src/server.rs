//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, binds the listener, and drives the Axum
//! server until shutdown, closing the backend afterwards.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use tracing::info;

use crate::config::{Config, StorageBackend};
use crate::routes::app_router;
use crate::state::AppState;
use crate::storage::{MemoryStorage, PgStorage, Storage};
use crate::utils::random::AliasGenerator;

/// Runs the HTTP server with the given configuration.
///
/// Failure to establish the storage connection aborts startup; it is the
/// only fatal path once configuration has been validated.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage: Arc<dyn Storage> = match config.storage_backend {
        StorageBackend::Memory => {
            info!("using in-memory storage");
            Arc::new(MemoryStorage::new())
        }
        StorageBackend::Postgres => {
            info!("using postgres storage");
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;
            Arc::new(PgStorage::connect(database_url, &config).await?)
        }
    };

    let state = AppState::new(
        storage.clone(),
        AliasGenerator::new(config.alias_length),
    );
    let app = app_router(state, Duration::from_secs(config.http_timeout));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await?;
    info!("storage closed, server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
