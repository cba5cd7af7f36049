//! Catalog definition files.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::catalog::{Catalog, CatalogBuilder};
use super::{DEFAULT_LOGICALS, DEFAULT_OPERATORS};
use crate::error::CatalogError;

/// On-disk (JSON) shape of a catalog.
///
/// ```json
/// {
///   "variables": ["Region", "Service"],
///   "values": { "Region": ["us-east-1", "eu-west-1"] },
///   "operators": ["==", "!="],
///   "logicals": ["AND", "OR"]
/// }
/// ```
///
/// `values`, `operators`, and `logicals` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDefinition {
    /// Variable names in listing order.
    pub variables: Vec<String>,
    /// Candidate values per variable.
    #[serde(default)]
    pub values: HashMap<String, Vec<String>>,
    /// Comparison operators.
    #[serde(default = "default_operators")]
    pub operators: Vec<String>,
    /// Logical connectives.
    #[serde(default = "default_logicals")]
    pub logicals: Vec<String>,
}

fn default_operators() -> Vec<String> {
    DEFAULT_OPERATORS.iter().map(|s| (*s).to_string()).collect()
}

fn default_logicals() -> Vec<String> {
    DEFAULT_LOGICALS.iter().map(|s| (*s).to_string()).collect()
}

impl CatalogDefinition {
    /// Validate the definition and build a catalog from it.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let builder = self
            .variables
            .into_iter()
            .fold(CatalogBuilder::new(), |builder, name| builder.with_variable(name));

        self.values
            .into_iter()
            .fold(builder, |builder, (variable, values)| {
                builder.with_values(variable, values)
            })
            .with_operators(self.operators)
            .with_logicals(self.logicals)
            .build()
    }
}

impl Catalog {
    /// Parse and validate a JSON catalog definition.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        definition.into_catalog()
    }

    /// Load a JSON catalog definition from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;

        debug!(
            path = %path.display(),
            variables = catalog.variables().len(),
            "Loaded catalog definition"
        );

        Ok(catalog)
    }
}
