//! Error handling for the gateway.

use std::any::Any;

use autosearch_core::ParamError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::json::{ErrorBody, JsonResponse};

/// Body sent for every internal failure. The cause is only logged.
pub const INTERNAL_ERROR_BODY: &str = r#"{"error":"internal"}"#;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request is missing a parameter or carries a malformed one.
    #[error("{0}")]
    BadRequest(String),

    /// The route exists but does not serve this method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Anything else that went wrong while handling the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                debug!(%message, "Rejected request");
                error_response(StatusCode::BAD_REQUEST, &message)
            }
            AppError::MethodNotAllowed => {
                error_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
            }
            AppError::Internal(cause) => {
                error!(%cause, "Request failed");
                internal_response()
            }
        }
    }
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    match JsonResponse::new(status, &ErrorBody { error: message }) {
        Ok(response) => response.into_response(),
        Err(_) => internal_response(),
    }
}

fn internal_response() -> Response {
    JsonResponse::from_bytes(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
        .into_response()
}

/// Convert a panic caught at the request boundary into the generic 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Handler panicked");
    internal_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_variable_message() {
        let err: AppError = ParamError::Missing { name: "variable" }.into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(
            body_text(response).await,
            r#"{"error":"variable param required"}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_integer_message() {
        let err: AppError = ParamError::InvalidInteger {
            name: "limit",
            value: "ten".to_string(),
        }
        .into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            r#"{"error":"limit param must be an integer"}"#
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let response = AppError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, r#"{"error":"method not allowed"}"#);
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let response = AppError::Internal("disk on fire".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_BODY);
    }

    #[tokio::test]
    async fn test_panic_response() {
        let response = panic_response(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, INTERNAL_ERROR_BODY);

        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
