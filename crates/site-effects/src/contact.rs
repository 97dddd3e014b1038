//! Contact form submission flow.
//!
//! The flow owns the form's rule set and stage. A rejected submission hands
//! back the validation result for rendering; an accepted one tells the page
//! what to show while the (simulated) send is pending and how long to wait
//! before revealing the success panel.

use serde::{Deserialize, Serialize};
use site_forms::{FieldValues, FormValidator, RuleSet, ValidationResult};
use tracing::debug;

/// Class added to an invalid field
pub const FIELD_ERROR_CLASS: &str = "field-error";
/// Class of the message element inserted after an invalid field
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactOptions {
    pub form_id: String,
    pub success_id: String,
    pub success_class: String,
    pub pending_label: String,
    pub submit_delay_ms: u32,
    pub rules: RuleSet,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            success_id: "formSuccess".to_string(),
            success_class: "show".to_string(),
            pending_label: "Sending…".to_string(),
            submit_delay_ms: 1200,
            rules: RuleSet::contact_form(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Editing,
    Sending,
    Sent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Show these errors and keep editing
    Rejected(ValidationResult),
    /// Disable the submit control, show the label, finish after the delay
    Accepted {
        pending_label: String,
        delay_ms: u32,
    },
    /// A send is already pending or done
    Ignored,
}

/// Event that clears a field's error: selects report `change`, text
/// inputs and textareas report `input`.
pub fn clear_event_for(tag_name: &str) -> &'static str {
    if tag_name.eq_ignore_ascii_case("select") {
        "change"
    } else {
        "input"
    }
}

#[derive(Debug, Clone)]
pub struct ContactFlow {
    options: ContactOptions,
    validator: FormValidator,
    stage: Stage,
}

impl ContactFlow {
    pub fn new(options: ContactOptions) -> Self {
        Self::with_validator(options, FormValidator::global().clone())
    }

    pub fn with_validator(options: ContactOptions, validator: FormValidator) -> Self {
        Self {
            options,
            validator,
            stage: Stage::Editing,
        }
    }

    pub fn options(&self) -> &ContactOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleSet {
        &self.options.rules
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn submit(&mut self, values: &FieldValues) -> Submission {
        if self.stage != Stage::Editing {
            debug!(stage = ?self.stage, "ignoring repeated contact form submission");
            return Submission::Ignored;
        }

        let result = self.validator.validate(values, &self.options.rules);
        if !result.is_valid() {
            return Submission::Rejected(result);
        }

        self.stage = Stage::Sending;
        Submission::Accepted {
            pending_label: self.options.pending_label.clone(),
            delay_ms: self.options.submit_delay_ms,
        }
    }

    /// The pending delay elapsed.
    pub fn complete(&mut self) {
        if self.stage == Stage::Sending {
            self.stage = Stage::Sent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldValues {
        FieldValues::new()
            .with("name", "Ravi Kumar")
            .with("email", "ravi@example.com")
            .with("phone", "9123456789")
            .with("service", "web-design")
            .with("message", "Looking for a site redesign.")
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut flow = ContactFlow::new(ContactOptions::default());
        let values = filled().with("email", "ravi@");

        match flow.submit(&values) {
            Submission::Rejected(result) => {
                assert_eq!(result.error("email"), Some("Enter a valid email address."));
                assert_eq!(result.errors().len(), 1);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(flow.stage(), Stage::Editing);
    }

    #[test]
    fn test_accepts_then_ignores_resubmission() {
        let mut flow = ContactFlow::new(ContactOptions::default());

        assert_eq!(
            flow.submit(&filled()),
            Submission::Accepted {
                pending_label: "Sending…".to_string(),
                delay_ms: 1200,
            }
        );
        assert_eq!(flow.stage(), Stage::Sending);
        assert_eq!(flow.submit(&filled()), Submission::Ignored);

        flow.complete();
        assert_eq!(flow.stage(), Stage::Sent);
        assert_eq!(flow.submit(&filled()), Submission::Ignored);
    }

    #[test]
    fn test_complete_before_send_is_noop() {
        let mut flow = ContactFlow::new(ContactOptions::default());
        flow.complete();
        assert_eq!(flow.stage(), Stage::Editing);
    }

    #[test]
    fn test_clear_event() {
        assert_eq!(clear_event_for("SELECT"), "change");
        assert_eq!(clear_event_for("INPUT"), "input");
        assert_eq!(clear_event_for("TEXTAREA"), "input");
    }
}
