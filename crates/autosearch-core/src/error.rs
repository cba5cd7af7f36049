//! Core error types.

use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a valid catalog definition.
    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same variable name was listed twice.
    #[error("duplicate variable: {0}")]
    DuplicateVariable(String),

    /// A value list was given for a variable that is not listed.
    #[error("values given for unknown variable: {0}")]
    UnknownVariable(String),
}

/// Errors raised while extracting request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A required parameter is absent or empty.
    #[error("{name} param required")]
    Missing {
        /// Parameter name.
        name: &'static str,
    },

    /// A numeric parameter is not a base-10 integer.
    #[error("{name} param must be an integer")]
    InvalidInteger {
        /// Parameter name.
        name: &'static str,
        /// The offending value, as received.
        value: String,
    },
}
