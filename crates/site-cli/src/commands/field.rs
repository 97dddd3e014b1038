use anyhow::{Context, Result};
use colored::Colorize;
use site_forms::{FormValidator, Rule};

/// Parse `name[:arg]` rules, failing on the first malformed one.
pub fn parse_rules(rules: &[String]) -> Result<Vec<Rule>> {
    rules
        .iter()
        .map(|rule| {
            rule.parse::<Rule>()
                .with_context(|| format!("Invalid rule: {:?}", rule))
        })
        .collect()
}

pub fn execute(value: &str, rules: &[String]) -> Result<bool> {
    let rules = parse_rules(rules)?;

    match FormValidator::global().validate_field(value, &rules) {
        None => {
            println!("{}", "✓ valid".green().bold());
            Ok(true)
        }
        Some(message) => {
            println!("{} {}", "✗".red().bold(), message);
            Ok(false)
        }
    }
}
