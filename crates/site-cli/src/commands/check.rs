use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use site_effects::SiteConfig;
use site_forms::{FieldValues, FormValidator, RuleSet, ValidationResult};
use tracing::{debug, info};

/// Read a JSON object of field values from a file, or stdin for `-`.
pub fn read_values(path: &Path) -> Result<FieldValues> {
    let content = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("Failed to read values from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read values file: {:?}", path))?
    };

    serde_json::from_str(&content).context("Values must be a JSON object of strings")
}

/// Validate `values` against the contact form rules of `config`.
pub fn check(config: &SiteConfig, values: &FieldValues) -> ValidationResult {
    let rules = &config.contact.rules;
    debug!(fields = rules.len(), values = values.len(), "checking submission");
    FormValidator::global().validate(values, rules)
}

/// One line per failing field, in rule order.
pub fn error_lines(result: &ValidationResult, rules: &RuleSet) -> Vec<String> {
    rules
        .field_names()
        .filter_map(|name| result.error(name).map(|message| format!("{}: {}", name, message)))
        .collect()
}

pub fn execute(config: &Path, values: &Path, json: bool) -> Result<bool> {
    let config = SiteConfig::load(config)?;
    let values = read_values(values)?;
    info!(fields = values.len(), "validating submission");
    let result = check(&config, &values);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid());
    }

    if result.is_valid() {
        println!("{}", "✓ Submission is valid".green().bold());
    } else {
        println!("{}", "✗ Submission has errors".red().bold());
        println!();
        for line in error_lines(&result, &config.contact.rules) {
            println!("  {}", line.yellow());
        }
    }

    Ok(result.is_valid())
}
