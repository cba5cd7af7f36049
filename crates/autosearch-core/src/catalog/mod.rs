//! Suggestion catalog.
//!
//! The catalog holds the vocabularies a filter-expression builder can pick from:
//! variable names, the candidate values of each variable, comparison operators,
//! and logical connectives. It is built once at startup and never mutated.

mod builtin;
mod catalog;
mod definition;

pub use catalog::{Catalog, CatalogBuilder};
pub use definition::CatalogDefinition;

/// Comparison operators offered when a catalog does not name its own.
pub const DEFAULT_OPERATORS: &[&str] = &["==", "!=", ">", "<", ">=", "<="];

/// Logical connectives offered when a catalog does not name its own.
pub const DEFAULT_LOGICALS: &[&str] = &["AND", "OR"];
