//! AutoSearch HTTP/JSON suggestion gateway.
//!
//! Serves the read-only vocabularies of a [`Catalog`] to clients that build
//! filter expressions: variable names, comparison operators, logical
//! connectives, and the candidate values of each variable, all paginated.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use std::sync::Arc;

use autosearch_core::Catalog;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Suggestion catalog, immutable for the life of the process.
    pub catalog: Arc<Catalog>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(catalog: Catalog, config: GatewayConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(routes::health::routes())
        .merge(routes::suggestions::routes());

    apply_middleware(router, &state.config).with_state(state)
}

/// Wrap routes with panic recovery, request tracing, and (optionally) CORS.
pub fn apply_middleware(router: Router<AppState>, config: &GatewayConfig) -> Router<AppState> {
    let router = router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http());

    if !config.cors_enabled {
        return router;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors)
}
