//! The immutable catalog and its builder.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{DEFAULT_LOGICALS, DEFAULT_OPERATORS};
use crate::error::CatalogError;

/// Read-only vocabularies served to suggestion clients.
///
/// All lookups borrow from the catalog, so one instance can be shared across
/// request handlers without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Variable names in listing order.
    variables: Vec<String>,
    /// Candidate values per variable.
    values: HashMap<String, Vec<String>>,
    /// Comparison operators.
    operators: Vec<String>,
    /// Logical connectives.
    logicals: Vec<String>,
}

impl Catalog {
    /// Create a catalog builder.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Assemble a catalog from already-validated parts.
    pub(super) fn from_parts(
        variables: Vec<String>,
        values: HashMap<String, Vec<String>>,
        operators: Vec<String>,
        logicals: Vec<String>,
    ) -> Self {
        Self {
            variables,
            values,
            operators,
            logicals,
        }
    }

    /// All variable names, in listing order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// All comparison operators.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// All logical connectives.
    pub fn logicals(&self) -> &[String] {
        &self.logicals
    }

    /// Candidate values for a variable. Empty when the variable is unknown.
    pub fn values_for(&self, variable: &str) -> &[String] {
        self.values
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Select a list by kind name (`variables`, `operators`, `logicals`).
    ///
    /// Any other kind yields an empty list.
    pub fn list(&self, kind: &str) -> &[String] {
        match kind {
            "variables" => self.variables(),
            "operators" => self.operators(),
            "logicals" => self.logicals(),
            _ => &[],
        }
    }

    /// Number of candidate values for every variable that has a value list.
    pub fn value_counts(&self) -> BTreeMap<&str, usize> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.len()))
            .collect()
    }
}

/// Builder for a validated [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    variables: Vec<String>,
    values: BTreeMap<String, Vec<String>>,
    operators: Vec<String>,
    logicals: Vec<String>,
}

impl CatalogBuilder {
    /// Create an empty builder with the default operators and logicals.
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            values: BTreeMap::new(),
            operators: DEFAULT_OPERATORS.iter().map(|s| (*s).to_string()).collect(),
            logicals: DEFAULT_LOGICALS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Append a variable name.
    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    /// Set the candidate values of a variable, replacing any earlier list.
    pub fn with_values<I, S>(mut self, variable: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(variable.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the comparison operators.
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the logical connectives.
    pub fn with_logicals<I, S>(mut self, logicals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.logicals = logicals.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and build the catalog.
    ///
    /// Variable names must be unique, and every value list must belong to a
    /// listed variable.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::with_capacity(self.variables.len());
        for name in &self.variables {
            if !seen.insert(name.as_str()) {
                return Err(CatalogError::DuplicateVariable(name.clone()));
            }
        }

        if let Some(unknown) = self.values.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(CatalogError::UnknownVariable(unknown.clone()));
        }

        Ok(Catalog::from_parts(
            self.variables,
            self.values.into_iter().collect(),
            self.operators,
            self.logicals,
        ))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::builder()
            .with_variable("Color")
            .with_variable("Size")
            .with_variable("Shape")
            .with_values("Color", ["red", "green", "blue"])
            .with_values("Size", ["S", "M"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_lists_keep_order() {
        let catalog = fixture();

        assert_eq!(catalog.variables(), ["Color", "Size", "Shape"]);
        assert_eq!(catalog.values_for("Color"), ["red", "green", "blue"]);
        assert_eq!(catalog.operators(), DEFAULT_OPERATORS);
        assert_eq!(catalog.logicals(), DEFAULT_LOGICALS);
    }

    #[test]
    fn test_values_for_miss_is_empty() {
        let catalog = fixture();

        // Listed but without values.
        assert!(catalog.values_for("Shape").is_empty());
        // Not listed at all.
        assert!(catalog.values_for("Weight").is_empty());
        assert!(catalog.values_for("").is_empty());
    }

    #[test]
    fn test_list_by_kind() {
        let catalog = fixture();

        assert_eq!(catalog.list("variables"), catalog.variables());
        assert_eq!(catalog.list("operators"), catalog.operators());
        assert_eq!(catalog.list("logicals"), catalog.logicals());
        assert!(catalog.list("functions").is_empty());
    }

    #[test]
    fn test_value_counts() {
        let catalog = fixture();
        let counts = catalog.value_counts();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Color"], 3);
        assert_eq!(counts["Size"], 2);
        assert!(!counts.contains_key("Shape"));
    }

    #[test]
    fn test_custom_operators_and_logicals() {
        let catalog = Catalog::builder()
            .with_operators(["=", "~"])
            .with_logicals(["AND", "OR", "NOT"])
            .build()
            .unwrap();

        assert_eq!(catalog.operators(), ["=", "~"]);
        assert_eq!(catalog.logicals(), ["AND", "OR", "NOT"]);
        assert!(catalog.variables().is_empty());
    }

    #[test]
    fn test_duplicate_variable_rejected() {
        let result = Catalog::builder()
            .with_variable("Region")
            .with_variable("Region")
            .build();

        assert!(matches!(result, Err(CatalogError::DuplicateVariable(name)) if name == "Region"));
    }

    #[test]
    fn test_values_for_unlisted_variable_rejected() {
        let result = Catalog::builder()
            .with_variable("Region")
            .with_values("Zone", ["a"])
            .build();

        assert!(matches!(result, Err(CatalogError::UnknownVariable(name)) if name == "Zone"));
    }
}
