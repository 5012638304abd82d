//! Handler for the save-url endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The destination URL (must be a syntactically valid absolute URL).
    #[validate(
        length(min = 1, message = "url is required"),
        url(message = "invalid url")
    )]
    pub url: String,

    /// Optional caller-chosen alias; a random one is generated when absent.
    pub alias: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
    pub id: i64,
}

/// Saves a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "my-alias" }
/// ```
///
/// `alias` is optional; when absent a random fixed-length alias is generated.
/// A generated alias that happens to collide is not retried: the save fails
/// and is reported as an internal error, since the caller cannot act on a
/// collision it did not choose.
///
/// # Errors
///
/// - 400 if the url is empty or malformed (storage is never consulted)
/// - 409 if the caller-chosen alias or the url already exists
/// - 500 on any other storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, AppError> {
    payload.validate()?;

    let (alias, generated) = match payload.alias.filter(|a| !a.is_empty()) {
        Some(alias) => (alias, false),
        None => (state.alias_generator.generate(), true),
    };

    match state.storage.save_url(&payload.url, &alias).await {
        Ok(id) => {
            info!(id, %alias, "url saved");
            Ok(Json(SaveResponse { alias, id }))
        }
        Err(StorageError::AlreadyExists) if generated => {
            error!(%alias, "generated alias collided with an existing record");
            Err(AppError::internal("internal error"))
        }
        Err(StorageError::AlreadyExists) => Err(AppError::conflict("url already exists")),
        Err(e) => {
            error!(error = %e, "failed to save url");
            Err(AppError::internal("internal error"))
        }
    }
}
