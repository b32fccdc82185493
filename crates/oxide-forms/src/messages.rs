//! User-facing validation messages.
//!
//! Copy text is configuration: every message can be replaced from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Messages shown by the validator and the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Required field left empty.
    pub required: String,
    /// Required checkbox left unchecked, when no field-specific message exists.
    pub checkbox: String,
    /// Required select without a choice, when no field-specific message exists.
    pub select: String,
    /// Malformed email address.
    pub email: String,
    /// Malformed phone number.
    pub phone: String,
    /// Message body too short.
    pub message: String,
    /// Label of the submit control while a submission is in flight.
    pub busy_label: String,
    /// Form-level message shown when the submitter fails.
    pub submit_failed: String,
    /// Field-specific messages keyed by field name.
    pub fields: BTreeMap<String, String>,
}

impl Default for Messages {
    fn default() -> Self {
        let fields = [
            ("firstName", "Please enter a valid first name (2-50 characters)."),
            ("lastName", "Please enter a valid last name (2-50 characters)."),
            ("service", "Please select a service."),
            ("serviceInterest", "Please select a service."),
            ("project", "Please select a project."),
            ("privacy", "Please accept the privacy policy."),
            ("privacyConsent", "Please accept the privacy policy."),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            required: "This field is required.".to_string(),
            checkbox: "Please tick this box.".to_string(),
            select: "Please choose an option.".to_string(),
            email: "Please enter a valid email address.".to_string(),
            phone: "Please enter a valid phone number (10-20 characters).".to_string(),
            message: "The message must contain at least 10 characters.".to_string(),
            busy_label: "Sending...".to_string(),
            submit_failed: "Your message could not be sent. Please try again.".to_string(),
            fields,
        }
    }
}

impl Messages {
    /// Returns the field-specific message for `key`.
    pub fn for_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the field-specific message for `key`, or `fallback`.
    pub fn for_field_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.for_field(key).unwrap_or(fallback)
    }
}
