//! The rule table consulted by [`FieldValidator`](crate::FieldValidator).
//!
//! A rule pairs a matcher (field name, input type or tag kind) with a
//! validator that carries its own message. Rules are checked in order; the
//! first matching rule that rejects the value decides the message. New rules
//! are appended, the engine does not change.

use std::fmt;

use crate::field::{FieldDescriptor, InputType, TagKind};
use crate::messages::Messages;
use crate::validation::{EmailValidator, MinLengthValidator, PersonNameValidator, PhoneValidator, Validator};

/// Minimum length of a message body, in characters.
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// Selects the fields a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatcher {
    /// Field key equals the name.
    Name(String),
    /// Input `type` equals.
    Type(InputType),
    /// Control kind equals.
    Tag(TagKind),
    /// Any of the nested matchers.
    AnyOf(Vec<FieldMatcher>),
}

impl FieldMatcher {
    /// Returns whether `field` is selected.
    pub fn matches(&self, field: &FieldDescriptor) -> bool {
        match self {
            Self::Name(name) => field.key() == name,
            Self::Type(input_type) => {
                field.tag == TagKind::Input && field.input_type == *input_type
            }
            Self::Tag(tag) => field.tag == *tag,
            Self::AnyOf(matchers) => matchers.iter().any(|m| m.matches(field)),
        }
    }
}

/// One entry of the table.
pub struct ValidationRule {
    /// Fields this rule applies to.
    pub matcher: FieldMatcher,
    /// Predicate and message.
    pub validator: Box<dyn Validator>,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("matcher", &self.matcher)
            .field("message", &self.validator.message())
            .finish()
    }
}

impl ValidationRule {
    /// Creates a rule.
    pub fn new(matcher: FieldMatcher, validator: impl Validator + 'static) -> Self {
        Self {
            matcher,
            validator: Box::new(validator),
        }
    }
}

/// Ordered rule table.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table: email, phone, first and last name, message body.
    pub fn standard(messages: &Messages) -> Self {
        let mut rules = Self::new()
            .rule(ValidationRule::new(
                FieldMatcher::AnyOf(vec![
                    FieldMatcher::Type(InputType::Email),
                    FieldMatcher::Name("email".to_string()),
                ]),
                EmailValidator::with_message(&messages.email),
            ))
            .rule(ValidationRule::new(
                FieldMatcher::AnyOf(vec![
                    FieldMatcher::Type(InputType::Tel),
                    FieldMatcher::Name("phone".to_string()),
                ]),
                PhoneValidator::with_message(&messages.phone),
            ));

        for name in ["firstName", "lastName"] {
            let validator = match messages.for_field(name) {
                Some(message) => PersonNameValidator::with_message(message),
                None => PersonNameValidator::new(),
            };
            rules = rules.rule(ValidationRule::new(
                FieldMatcher::Name(name.to_string()),
                validator,
            ));
        }

        rules.rule(ValidationRule::new(
            FieldMatcher::AnyOf(vec![
                FieldMatcher::Tag(TagKind::Textarea),
                FieldMatcher::Name("message".to_string()),
            ]),
            MinLengthValidator::with_message(MESSAGE_MIN_LENGTH, &messages.message),
        ))
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// Returns the rules that apply to `field`, in order.
    pub fn applicable<'a>(
        &'a self,
        field: &'a FieldDescriptor,
    ) -> impl Iterator<Item = &'a ValidationRule> + 'a {
        self.rules.iter().filter(move |r| r.matcher.matches(field))
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
