//! Headless validation of field payloads.

use std::fmt;

use oxide_forms::{FieldDescriptor, FieldValidator, ValidationFailure};
use serde::Serialize;

use crate::error::Result;

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            None => write!(f, "{}: ok", self.field),
            Some(message) => write!(f, "{}: invalid: {message}", self.field),
        }
    }
}

/// Parses a JSON array of field descriptors.
pub fn parse_fields(json: &str) -> Result<Vec<FieldDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

/// Checks every field, in order.
pub fn validate_fields(validator: &FieldValidator, fields: &[FieldDescriptor]) -> Vec<FieldReport> {
    fields
        .iter()
        .map(|field| match validator.check(field) {
            Ok(()) => FieldReport {
                field: field.key().to_string(),
                message: None,
            },
            Err(ValidationFailure { field, message }) => FieldReport {
                field,
                message: Some(message),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_in_input_order() {
        let fields = parse_fields(
            r#"[
                {"name": "email", "type": "email", "value": "nope", "required": true},
                {"name": "firstName", "value": "Al", "required": true},
                {"tag": "textarea", "id": "message", "value": "short"}
            ]"#,
        )
        .unwrap();
        let reports = validate_fields(&FieldValidator::default(), &fields);

        assert_eq!(
            reports.iter().map(ToString::to_string).collect::<Vec<_>>(),
            [
                "email: invalid: Please enter a valid email address.",
                "firstName: ok",
                "message: invalid: The message must contain at least 10 characters.",
            ]
        );
        assert!(!reports[0].is_valid());
        assert!(reports[1].is_valid());
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_fields(r#"{"name": "email"}"#).is_err());
    }
}
