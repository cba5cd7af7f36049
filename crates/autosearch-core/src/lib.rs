//! AutoSearch Core - suggestion catalog, pagination, and request parameters.
//!
//! This crate holds everything the suggestion endpoints compute with, independent
//! of the HTTP transport: the immutable [`Catalog`] of vocabularies, the [`page`]
//! function that slices an ordered sequence, and [`QueryParams`] for decoding
//! and type-coercing query string parameters.

pub mod catalog;
pub mod error;
pub mod pager;
pub mod query;

pub use catalog::{Catalog, CatalogBuilder, CatalogDefinition, DEFAULT_LOGICALS, DEFAULT_OPERATORS};
pub use error::{CatalogError, ParamError};
pub use pager::{page, Page, PageRequest, DEFAULT_LIMIT};
pub use query::QueryParams;
