//! The validation engine.

use std::fmt;

use crate::error::{ValidationErrors, ValidationFailure};
use crate::field::{FieldDescriptor, InputType, TagKind};
use crate::messages::Messages;
use crate::rules::{RuleSet, ValidationRule};

/// Visual validation state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not validated since load or the last reset.
    #[default]
    Unmarked,
    /// Last check passed.
    Valid,
    /// Last check failed with `message`.
    Invalid { message: String },
}

impl FieldState {
    /// Returns whether the last check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns whether the last check failed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Returns the failure message, if invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

impl From<Result<(), ValidationFailure>> for FieldState {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(failure) => Self::Invalid {
                message: failure.message,
            },
        }
    }
}

/// Decides pass or fail for single fields.
///
/// Checks run in a fixed order and the first deciding branch wins:
///
/// 1. optional and empty: valid
/// 2. required and empty: the required message
/// 3. checkboxes: a required box must be checked, nothing else is checked
/// 4. the [`RuleSet`] table (email, phone, names, message body, custom rules)
/// 5. selects: a required select needs a value
///
/// ```rust
/// use oxide_forms::{FieldDescriptor, FieldValidator, InputType};
///
/// let validator = FieldValidator::default();
/// let email = FieldDescriptor::input("email", InputType::Email)
///     .required()
///     .value("not-an-email");
///
/// let failure = validator.check(&email).unwrap_err();
/// assert_eq!(failure.message, "Please enter a valid email address.");
/// ```
pub struct FieldValidator {
    rules: RuleSet,
    messages: Messages,
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(Messages::default())
    }
}

impl FieldValidator {
    /// Creates a validator with the standard rule table.
    pub fn new(messages: Messages) -> Self {
        let rules = RuleSet::standard(&messages);
        Self { rules, messages }
    }

    /// Creates a validator with a custom rule table.
    pub fn with_rules(messages: Messages, rules: RuleSet) -> Self {
        Self { rules, messages }
    }

    /// Appends a rule to the table.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the messages in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Checks one field.
    pub fn check(&self, field: &FieldDescriptor) -> Result<(), ValidationFailure> {
        let key = field.key();
        let value = field.trimmed_value();
        let fail = |message: &str| Err(ValidationFailure::new(key, message));

        if value.is_empty() {
            return if field.required {
                fail(self.messages.required.as_str())
            } else {
                Ok(())
            };
        }

        if field.tag == TagKind::Input && field.input_type == InputType::Checkbox {
            return if field.required && !field.checked {
                fail(self.messages.for_field_or(key, &self.messages.checkbox))
            } else {
                Ok(())
            };
        }

        for rule in self.rules.applicable(field) {
            if let Err(message) = rule.validator.validate(value) {
                return fail(message.as_str());
            }
        }

        // Shadowed by the empty check above for trimmed values.
        if field.tag == TagKind::Select && field.required && value.is_empty() {
            return fail(self.messages.for_field_or(key, &self.messages.select));
        }

        Ok(())
    }

    /// Checks one field and returns its new visual state.
    pub fn state(&self, field: &FieldDescriptor) -> FieldState {
        self.check(field).into()
    }

    /// Checks every field without short-circuiting.
    pub fn validate_all(&self, fields: &[FieldDescriptor]) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in fields {
            if let Err(failure) = self.check(field) {
                errors.add(&failure.field, failure.message);
            }
        }
        errors
    }
}
