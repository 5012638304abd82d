//! Shared helpers for handler integration tests.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use shortlink::handlers::{redirect_handler, save_handler};
use shortlink::prelude::*;

/// Builds a router over a fresh in-memory backend.
///
/// Returns the backend too so tests can seed or inspect records directly.
pub fn test_app() -> (Router, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::new(storage.clone(), AliasGenerator::new(6));

    let app = Router::new()
        .route("/url", post(save_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    (app, storage)
}
