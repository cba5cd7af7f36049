//! Suggestion endpoints.
//!
//! Every handler parses the raw query string, looks the requested list up in
//! the catalog, pages it, and writes the page back as JSON. Unknown variables
//! and unknown list kinds produce empty pages rather than errors.

use autosearch_core::QueryParams;
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Router,
};
use tracing::debug;

use crate::error::AppError;
use crate::json::{JsonResponse, MetaResponse, PageResponse, ValuesResponse};
use crate::routes::method_not_allowed;
use crate::AppState;

/// Suggestion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/suggestions/meta",
            get(handle_meta).fallback(method_not_allowed),
        )
        .route(
            "/api/suggestions/variables",
            get(handle_variables).fallback(method_not_allowed),
        )
        .route(
            "/api/suggestions/operators",
            get(handle_operators).fallback(method_not_allowed),
        )
        .route(
            "/api/suggestions/logicals",
            get(handle_logicals).fallback(method_not_allowed),
        )
        .route(
            "/api/suggestions/values",
            get(handle_values).fallback(method_not_allowed),
        )
}

/// Catalog sizes.
async fn handle_meta(State(state): State<AppState>) -> Result<JsonResponse, AppError> {
    JsonResponse::ok(&MetaResponse::from(state.catalog.as_ref()))
}

async fn handle_variables(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<JsonResponse, AppError> {
    paged_list(&state, "variables", query.as_deref())
}

async fn handle_operators(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<JsonResponse, AppError> {
    paged_list(&state, "operators", query.as_deref())
}

async fn handle_logicals(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<JsonResponse, AppError> {
    paged_list(&state, "logicals", query.as_deref())
}

/// Page one of the catalog's fixed lists, selected by `kind`.
fn paged_list(state: &AppState, kind: &str, query: Option<&str>) -> Result<JsonResponse, AppError> {
    let params = QueryParams::parse(query);
    let request = params.page_request()?;

    let page = request.apply(state.catalog.list(kind));
    debug!(
        kind,
        offset = page.offset,
        limit = page.limit,
        returned = page.items.len(),
        total = page.total,
        "Serving suggestion page"
    );

    JsonResponse::ok(&PageResponse::from(page))
}

/// Page the candidate values of `variable`.
async fn handle_values(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<JsonResponse, AppError> {
    let params = QueryParams::parse(query.as_deref());
    let variable = params.required("variable")?;
    let request = params.page_request()?;

    let page = request.apply(state.catalog.values_for(variable));
    debug!(
        variable,
        offset = page.offset,
        limit = page.limit,
        returned = page.items.len(),
        total = page.total,
        "Serving value page"
    );

    JsonResponse::ok(&ValuesResponse {
        variable,
        page: page.into(),
    })
}
