//! Per-form rule tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rule::{Rule, RuleParseError};

/// Rules for one field, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("invalid rule for field '{field}': {source}")]
    InvalidRule {
        field: String,
        #[source]
        source: RuleParseError,
    },
}

/// Ordered mapping of field name to rules. Field names are unique.
///
/// Built once per form and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldRules>", into = "Vec<FieldRules>")]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Fails if the field is already present.
    pub fn push(&mut self, name: impl Into<String>, rules: Vec<Rule>) -> Result<(), RuleSetError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RuleSetError::DuplicateField(name));
        }
        self.fields.push(FieldRules { name, rules });
        Ok(())
    }

    /// Builder-style [`RuleSet::push`] taking rules in `name[:arg]` notation.
    ///
    /// ```
    /// use site_forms::RuleSet;
    ///
    /// let rules = RuleSet::new()
    ///     .field("name", ["required", "minLength:2"])?
    ///     .field("email", ["required", "email"])?;
    /// assert_eq!(rules.len(), 2);
    /// # Ok::<(), site_forms::RuleSetError>(())
    /// ```
    pub fn field<I, S>(mut self, name: &str, rules: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|r| r.as_ref().parse::<Rule>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RuleSetError::InvalidRule {
                field: name.to_string(),
                source,
            })?;
        self.push(name, rules)?;
        Ok(self)
    }

    /// Rules used by the site's contact form.
    pub fn contact_form() -> Self {
        let field = |name: &str, rules: Vec<Rule>| FieldRules {
            name: name.to_string(),
            rules,
        };
        Self {
            fields: vec![
                field("name", vec![Rule::Required, Rule::MinLength(2)]),
                field("email", vec![Rule::Required, Rule::Email]),
                field("phone", vec![Rule::Phone]),
                field("service", vec![Rule::Required]),
                field("message", vec![Rule::Required, Rule::MinLength(10)]),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.rules.as_slice()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldRules>> for RuleSet {
    type Error = RuleSetError;

    fn try_from(fields: Vec<FieldRules>) -> Result<Self, Self::Error> {
        let mut set = RuleSet::new();
        for FieldRules { name, rules } in fields {
            set.push(name, rules)?;
        }
        Ok(set)
    }
}

impl From<RuleSet> for Vec<FieldRules> {
    fn from(set: RuleSet) -> Self {
        set.fields
    }
}
