//! Health check endpoint.

use axum::{extract::State, routing::get, Router};

use crate::error::AppError;
use crate::json::{HealthResponse, JsonResponse};
use crate::routes::method_not_allowed;
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check).fallback(method_not_allowed))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Result<JsonResponse, AppError> {
    JsonResponse::ok(&HealthResponse {
        status: "healthy",
        service: "autosearch-gateway",
        version: env!("CARGO_PKG_VERSION"),
        variables: state.catalog.variables().len(),
    })
}
