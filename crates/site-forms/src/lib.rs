//! # site-forms
//!
//! Rule-based validation for the site's forms.
//!
//! A [`RuleSet`] lists, per field, the [`Rule`]s to apply in order. The
//! [`FormValidator`] runs it against the submitted [`FieldValues`] and
//! reports the first failing message per field in a [`ValidationResult`].
//!
//! ```
//! use site_forms::{validate, FieldValues, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .field("name", ["required", "minLength:2"])?
//!     .field("email", ["required", "email"])?;
//!
//! let values = FieldValues::new().with("name", "A").with("email", "bad");
//! let result = validate(&values, &rules);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error("name"), Some("Must be at least 2 characters."));
//! assert_eq!(result.error("email"), Some("Enter a valid email address."));
//! # Ok::<(), site_forms::RuleSetError>(())
//! ```
//!
//! Built-in rules: `required`, `email`, `phone`, `minLength:n`, `maxLength:n`.
//! Only `required` rejects an empty value. Names that are neither built in
//! nor registered on the validator are skipped.

pub mod result;
pub mod rule;
pub mod rule_set;
pub mod validator;
pub mod validators;

pub use result::{FieldValues, ValidationResult};
pub use rule::{Rule, RuleParseError, BUILTIN_NAMES};
pub use rule_set::{FieldRules, RuleSet, RuleSetError};
pub use validator::{validate, FormValidator, FormValidatorBuilder, Predicate, RegistryError};
pub use validators::Outcome;
