//! Router configuration and middleware stack.
//!
//! # Route Structure
//!
//! - `POST /url`      - save a url under a new alias
//! - `GET  /{alias}`  - redirect to the stored url
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Timeout** - per-request deadline; an expired deadline drops the
//!   handler future and aborts any in-flight storage statement
//! - **Path normalization** - trailing slash handling

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{redirect_handler, save_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/url", post(save_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Request tracing: an INFO span per request, latency on response.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
