//! Error types for forms.

use std::collections::HashMap;

use oxide_dom::NodeId;
use thiserror::Error;

use crate::submit::SubmitError;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The node is not a `form` element.
    #[error("node {0} is not a form")]
    NotAForm(NodeId),

    /// Form data could not be encoded.
    #[error("failed to encode form data: {0}")]
    Payload(#[from] serde_json::Error),

    /// A custom validation pattern did not compile.
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The submitter reported a failure.
    #[error("submission failed: {0}")]
    Submission(#[from] SubmitError),
}

/// A field that did not pass validation.
///
/// This is the only validation error kind. It is shown to the user by
/// marking the field, never propagated out of event handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationFailure {
    /// Key of the offending field (name, or id when unnamed).
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a new failure.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl From<ValidationFailure> for ValidationErrors {
    fn from(failure: ValidationFailure) -> Self {
        let mut errors = Self::new();
        errors.add(&failure.field, failure.message);
        errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, messages) in fields {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
