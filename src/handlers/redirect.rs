//! Handler for short alias redirect.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::StorageError;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Issues a 302 Found pointing at the stored url.
///
/// # Errors
///
/// - 400 if the alias is blank (storage is never consulted)
/// - 404 if no record has that alias
/// - 500 on any other storage failure
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if alias.trim().is_empty() {
        return Err(AppError::bad_request("invalid request"));
    }

    let url = match state.storage.get_url(&alias).await {
        Ok(url) => url,
        Err(StorageError::NotFound) => return Err(AppError::not_found("not found")),
        Err(e) => {
            error!(error = %e, %alias, "failed to look up alias");
            return Err(AppError::internal("internal error"));
        }
    };

    found_redirect(&url)
}

// axum's `Redirect` only offers 303/307/308, so the 302 is built by hand.
fn found_redirect(url: &str) -> Result<Response, AppError> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, url)
        .body(Body::empty())
        .map_err(|e| {
            error!(error = %e, "failed to build redirect response");
            AppError::internal("internal error")
        })
}
