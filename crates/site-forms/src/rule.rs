//! Validation rules and their `name[:arg]` notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single check applied to one field value.
///
/// Built-in rules carry typed arguments. Anything else is kept as
/// [`Rule::Custom`] and resolved against the registry at validation time.
///
/// # Examples
/// ```
/// use site_forms::Rule;
///
/// assert_eq!("minLength:2".parse::<Rule>().unwrap(), Rule::MinLength(2));
/// assert_eq!(Rule::MaxLength(80).to_string(), "maxLength:80");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rule {
    Required,
    Email,
    Phone,
    MinLength(usize),
    MaxLength(usize),
    Custom { name: String, arg: Option<String> },
}

/// Names reserved for the built-in rules.
pub const BUILTIN_NAMES: &[&str] = &["required", "email", "phone", "minLength", "maxLength"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("empty rule")]
    Empty,

    #[error("rule '{0}' requires an integer argument (e.g. '{0}:2')")]
    MissingArgument(String),

    #[error("rule '{rule}' expects an integer argument, got '{arg}'")]
    InvalidArgument { rule: String, arg: String },

    #[error("rule '{0}' does not take an argument")]
    UnexpectedArgument(String),
}

impl Rule {
    /// Registry name of the rule.
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::Email => "email",
            Rule::Phone => "phone",
            Rule::MinLength(_) => "minLength",
            Rule::MaxLength(_) => "maxLength",
            Rule::Custom { name, .. } => name,
        }
    }

    pub fn custom(name: impl Into<String>, arg: Option<&str>) -> Self {
        Rule::Custom {
            name: name.into(),
            arg: arg.map(str::to_string),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Rule::Custom { .. })
    }
}

fn length_arg(rule: &str, arg: Option<&str>) -> Result<usize, RuleParseError> {
    let arg = arg.ok_or_else(|| RuleParseError::MissingArgument(rule.to_string()))?;
    arg.trim()
        .parse::<usize>()
        .map_err(|_| RuleParseError::InvalidArgument {
            rule: rule.to_string(),
            arg: arg.to_string(),
        })
}

fn no_arg(rule: Rule, arg: Option<&str>) -> Result<Rule, RuleParseError> {
    match arg {
        Some(_) => Err(RuleParseError::UnexpectedArgument(rule.name().to_string())),
        None => Ok(rule),
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RuleParseError::Empty);
        }

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s, None),
        };

        match name {
            "" => Err(RuleParseError::Empty),
            "required" => no_arg(Rule::Required, arg),
            "email" => no_arg(Rule::Email, arg),
            "phone" => no_arg(Rule::Phone, arg),
            "minLength" => Ok(Rule::MinLength(length_arg(name, arg)?)),
            "maxLength" => Ok(Rule::MaxLength(length_arg(name, arg)?)),
            other => Ok(Rule::custom(other, arg)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(n) | Rule::MaxLength(n) => write!(f, "{}:{}", self.name(), n),
            Rule::Custom {
                name,
                arg: Some(arg),
            } => write!(f, "{}:{}", name, arg),
            _ => f.write_str(self.name()),
        }
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
