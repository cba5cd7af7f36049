//! JSON response types for the suggestion endpoints.

use std::collections::BTreeMap;

use autosearch_core::{Catalog, Page};
use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Content type carried by every response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A serialized JSON body with its status code.
///
/// The body is encoded eagerly so handlers can serialize data borrowed from
/// the shared catalog before returning.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    body: Bytes,
}

impl JsonResponse {
    /// Serialize `value` as a compact JSON body.
    pub fn new<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<Self, AppError> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(status, body))
    }

    /// Serialize `value` as a `200 OK` response.
    pub fn ok<T: Serialize + ?Sized>(value: &T) -> Result<Self, AppError> {
        Self::new(StatusCode::OK, value)
    }

    /// Wrap an already-encoded JSON body.
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            )],
            self.body,
        )
            .into_response()
    }
}

/// Catalog sizes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse<'a> {
    /// Number of variables.
    pub variables_count: usize,
    /// Number of comparison operators.
    pub operators_count: usize,
    /// Number of logical connectives.
    pub logicals_count: usize,
    /// Number of candidate values per variable.
    pub values_counts: BTreeMap<&'a str, usize>,
}

impl<'a> From<&'a Catalog> for MetaResponse<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            variables_count: catalog.variables().len(),
            operators_count: catalog.operators().len(),
            logicals_count: catalog.logicals().len(),
            values_counts: catalog.value_counts(),
        }
    }
}

/// One page of a suggestion list.
#[derive(Debug, Serialize)]
pub struct PageResponse<'a> {
    /// Items on this page.
    pub items: &'a [String],
    /// Offset as requested.
    pub offset: i64,
    /// Limit as requested.
    pub limit: i64,
    /// Size of the whole list.
    pub total: usize,
}

impl<'a> From<Page<'a, String>> for PageResponse<'a> {
    fn from(page: Page<'a, String>) -> Self {
        Self {
            items: page.items,
            offset: page.offset,
            limit: page.limit,
            total: page.total,
        }
    }
}

/// One page of candidate values for a variable.
#[derive(Debug, Serialize)]
pub struct ValuesResponse<'a> {
    /// Variable the values belong to.
    pub variable: &'a str,
    /// The page itself.
    #[serde(flatten)]
    pub page: PageResponse<'a>,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    /// Error message.
    pub error: &'a str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Gateway version.
    pub version: &'static str,
    /// Number of variables in the loaded catalog.
    pub variables: usize,
}
