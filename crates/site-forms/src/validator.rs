//! The form validator and its rule registry.
//!
//! Built-in rules are dispatched directly on [`Rule`]. Custom rules are
//! looked up by name in a registry that is filled through
//! [`FormValidatorBuilder`] and frozen by [`FormValidatorBuilder::build`].
//! A rule whose name is not registered passes.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::result::{FieldValues, ValidationResult};
use crate::rule::{Rule, BUILTIN_NAMES};
use crate::rule_set::RuleSet;
use crate::validators::{check_builtin, Outcome};

/// Check for a custom rule: receives the raw value and the rule argument.
pub type Predicate = Arc<dyn Fn(&str, Option<&str>) -> Outcome + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("'{0}' is a built-in rule and cannot be registered")]
    ReservedName(String),

    #[error("rule '{0}' is registered more than once")]
    DuplicateName(String),
}

static GLOBAL: Lazy<FormValidator> = Lazy::new(FormValidator::default);

/// Evaluates field values against a [`RuleSet`].
#[derive(Clone, Default)]
pub struct FormValidator {
    custom: HashMap<String, Predicate>,
}

impl fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.custom.keys().collect();
        names.sort();
        f.debug_struct("FormValidator")
            .field("custom", &names)
            .finish()
    }
}

impl FormValidator {
    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::default()
    }

    /// Shared validator with only the built-in rules.
    pub fn global() -> &'static FormValidator {
        &GLOBAL
    }

    /// Whether `name` resolves to a check (built-in or registered).
    pub fn knows(&self, name: &str) -> bool {
        BUILTIN_NAMES.contains(&name) || self.custom.contains_key(name)
    }

    fn check(&self, rule: &Rule, value: &str) -> Outcome {
        if let Some(outcome) = check_builtin(rule, value) {
            return outcome;
        }

        let Rule::Custom { name, arg } = rule else {
            return Ok(());
        };
        match self.custom.get(name) {
            Some(predicate) => predicate(value, arg.as_deref()),
            None => {
                debug!(rule = %name, "skipping unknown validation rule");
                Ok(())
            }
        }
    }

    /// First failing message for one value, or `None` when every rule passes.
    pub fn validate_field(&self, value: &str, rules: &[Rule]) -> Option<String> {
        rules.iter().find_map(|rule| self.check(rule, value).err())
    }

    /// Validate every field present in both `values` and `rules`.
    ///
    /// Fields missing from `values` are skipped. Each field reports at most
    /// one message: the first rule that fails, in declaration order.
    pub fn validate(&self, values: &FieldValues, rules: &RuleSet) -> ValidationResult {
        let errors: BTreeMap<String, String> = rules
            .iter()
            .filter_map(|(name, field_rules)| {
                let value = values.get(name)?;
                self.validate_field(value, field_rules)
                    .map(|message| (name.to_string(), message))
            })
            .collect();

        if !errors.is_empty() {
            debug!(failed = errors.len(), "form validation failed");
        }
        ValidationResult::from_errors(errors)
    }
}

/// Validate with the built-in rules only.
pub fn validate(values: &FieldValues, rules: &RuleSet) -> ValidationResult {
    FormValidator::global().validate(values, rules)
}

/// Collects custom rules before the registry is frozen.
#[derive(Default)]
pub struct FormValidatorBuilder {
    entries: Vec<(String, Predicate)>,
}

impl FormValidatorBuilder {
    /// Register a custom rule.
    ///
    /// ```
    /// use site_forms::{FieldValues, FormValidator, RuleSet};
    ///
    /// let validator = FormValidator::builder()
    ///     .register("digits", |value, _| {
    ///         if value.chars().all(|c| c.is_ascii_digit()) {
    ///             Ok(())
    ///         } else {
    ///             Err("Digits only.".to_string())
    ///         }
    ///     })
    ///     .build()?;
    ///
    /// let rules = RuleSet::new().field("pin", ["digits"])?;
    /// let result = validator.validate(&FieldValues::new().with("pin", "12a"), &rules);
    /// assert_eq!(result.error("pin"), Some("Digits only."));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn register<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> Outcome + Send + Sync + 'static,
    {
        let predicate: Predicate = Arc::new(predicate);
        self.entries.push((name.into(), predicate));
        self
    }

    pub fn build(self) -> Result<FormValidator, RegistryError> {
        let mut custom = HashMap::with_capacity(self.entries.len());
        for (name, predicate) in self.entries {
            if BUILTIN_NAMES.contains(&name.as_str()) {
                return Err(RegistryError::ReservedName(name));
            }
            if custom.contains_key(&name) {
                return Err(RegistryError::DuplicateName(name));
            }
            custom.insert(name, predicate);
        }
        Ok(FormValidator { custom })
    }
}
