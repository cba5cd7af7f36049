//! HTTP route handlers.

pub mod health;
pub mod suggestions;

use crate::error::AppError;

/// Fallback for any method a route does not serve.
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
