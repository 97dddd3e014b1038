// File: src/result.rs
// Purpose: Field values in, validation result out

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::rule_set::RuleSet;

/// Raw field values keyed by field name.
///
/// A field that exists on the form but holds nothing is the empty string;
/// a field that does not exist is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for FieldValues {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// Result of validating a form.
///
/// `valid` is true exactly when `errors` is empty; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Build from the first failing message per field
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Message for a specific field
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// First failing field in the rule set's declaration order.
    pub fn first_error<'a>(&'a self, rules: &'a RuleSet) -> Option<(&'a str, &'a str)> {
        rules
            .field_names()
            .find_map(|name| self.error(name).map(|msg| (name, msg)))
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}
