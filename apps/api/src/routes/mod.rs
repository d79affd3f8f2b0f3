pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::analysis::handlers;
use crate::config::MAX_BODY_BYTES;
use crate::errors::AppError;
use crate::recommendations::handle_recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // CV analysis
        .route("/analyze-cv", post(handlers::handle_analyze_cv))
        .route(
            "/analyze-cv-base64",
            post(handlers::handle_analyze_cv_base64),
        )
        // Structured recommendations; /prod is the path the web front end calls
        .route("/recommendations", post(handle_recommendations))
        .route("/prod", post(handle_recommendations))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turns a panicking handler into a regular 500 `INTERNAL_ERROR` response.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!(detail)).into_response()
}
