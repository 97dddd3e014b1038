// File: src/validators.rs
// Purpose: Built-in field validators

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::Rule;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Indian mobile numbers: 10 digits, leading 6-9
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern is valid"));

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const PHONE_MESSAGE: &str = "Enter a valid 10-digit mobile number.";

/// Outcome of a single check. `Err` carries the message shown to the user.
pub type Outcome = Result<(), String>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone.trim())
}

/// Length of the trimmed value in UTF-16 code units, as the page's
/// `value.length` and native `minlength` count it. Characters outside the
/// BMP, such as most emoji, count as two.
fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

pub fn validate_required(value: &str) -> Outcome {
    if value.trim().is_empty() {
        Err(REQUIRED_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

// Format and length checks let an empty value through; `required` owns emptiness.

pub fn validate_email(value: &str) -> Outcome {
    if value.is_empty() || is_valid_email(value) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}

pub fn validate_phone(value: &str) -> Outcome {
    if value.is_empty() || is_valid_phone(value) {
        Ok(())
    } else {
        Err(PHONE_MESSAGE.to_string())
    }
}

pub fn validate_min_length(value: &str, min: usize) -> Outcome {
    if value.is_empty() || trimmed_len(value) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters.", min))
    }
}

pub fn validate_max_length(value: &str, max: usize) -> Outcome {
    if value.is_empty() || trimmed_len(value) <= max {
        Ok(())
    } else {
        Err(format!("Must be {} characters or fewer.", max))
    }
}

/// Runs a built-in rule. Returns `None` for custom rules.
pub(crate) fn check_builtin(rule: &Rule, value: &str) -> Option<Outcome> {
    let outcome = match rule {
        Rule::Required => validate_required(value),
        Rule::Email => validate_email(value),
        Rule::Phone => validate_phone(value),
        Rule::MinLength(n) => validate_min_length(value, *n),
        Rule::MaxLength(n) => validate_max_length(value, *n),
        Rule::Custom { .. } => return None,
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("user.name+tag@example.co.in")]
    #[case("  padded@example.com  ")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("bad")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("user@example")]
    #[case("us er@example.com")]
    #[case("user@@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[rstest]
    #[case("9876543210", true)]
    #[case("6000000000", true)]
    #[case(" 7123456789 ", true)]
    #[case("5876543210", false)]
    #[case("987654321", false)]
    #[case("98765432101", false)]
    #[case("+919876543210", false)]
    #[case("98765abcde", false)]
    fn test_phone_numbers(#[case] phone: &str, #[case] ok: bool) {
        assert_eq!(is_valid_phone(phone), ok);
    }

    #[test]
    fn test_required() {
        assert!(validate_required("x").is_ok());
        assert_eq!(validate_required("").unwrap_err(), REQUIRED_MESSAGE);
        assert_eq!(validate_required("   ").unwrap_err(), REQUIRED_MESSAGE);
    }

    #[test]
    fn test_format_rules_allow_empty() {
        assert!(validate_email("").is_ok());
        assert!(validate_phone("").is_ok());
        assert!(validate_min_length("", 5).is_ok());
        assert!(validate_max_length("", 0).is_ok());
    }

    #[test]
    fn test_whitespace_only_is_checked_after_trim() {
        assert_eq!(validate_email("   ").unwrap_err(), EMAIL_MESSAGE);
        assert_eq!(
            validate_min_length("   ", 2).unwrap_err(),
            "Must be at least 2 characters."
        );
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 5).is_ok());
        assert!(validate_min_length(" hi ", 3).is_err());
        assert!(validate_max_length("hello", 5).is_ok());
        assert_eq!(
            validate_max_length("hello world", 5).unwrap_err(),
            "Must be 5 characters or fewer."
        );
        // counted in UTF-16 units, not bytes
        assert!(validate_max_length("ñandú", 5).is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(validate_min_length("😀", 2).is_ok());
        assert!(validate_min_length("😀", 3).is_err());
        assert!(validate_max_length("😀😀", 3).is_err());
        assert!(validate_max_length("😀", 2).is_ok());
    }

    #[test]
    fn test_custom_rules_are_not_builtin_checks() {
        assert!(check_builtin(&Rule::custom("slug", None), "anything").is_none());
        assert_eq!(check_builtin(&Rule::Required, ""), Some(Err(REQUIRED_MESSAGE.into())));
    }
}
