//! Field value validators.
//!
//! Each validator carries the message shown when it rejects a value. Values
//! reaching a validator are already trimmed and non-empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() ]{10,20}$").expect("phone pattern compiles"));

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÿ\s'\-]{2,50}$").expect("name pattern compiles")
});

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> std::result::Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses: local part, `@`, domain, `.`, TLD, no
/// whitespace.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Please enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for phone numbers: 10 to 20 of digits, `+`, `-`, `(`, `)` and
/// space.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    message: String,
}

impl PhoneValidator {
    /// Creates a new PhoneValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Please enter a valid phone number (10-20 characters).".to_string(),
        }
    }

    /// Creates a new PhoneValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PhoneValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if PHONE_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for personal names: 2 to 50 letters (Latin-1 accents
/// included), whitespace, hyphens and apostrophes.
#[derive(Debug, Clone)]
pub struct PersonNameValidator {
    message: String,
}

impl PersonNameValidator {
    /// Creates a new PersonNameValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Please enter a valid name (2-50 characters).".to_string(),
        }
    }

    /// Creates a new PersonNameValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PersonNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PersonNameValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if NAME_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_counts_characters() {
        let v = MinLengthValidator::new(10);
        assert!(v.validate("1234567890").is_ok());
        assert!(v.validate("123456789").is_err());
        // 10 characters, 20 bytes
        assert!(v.validate("ääääääääää").is_ok());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate("a@b.co").is_ok());
        assert!(v.validate("user.name@domain.co.uk").is_ok());
        assert!(v.validate("not-an-email").is_err());
        assert!(v.validate("a@b@c.de").is_err());
        assert!(v.validate("a@bco").is_err());
        assert!(v.validate("a b@c.de").is_err());
        assert!(v.validate("@example.com").is_err());
    }

    #[test]
    fn test_phone_validator() {
        let v = PhoneValidator::new();
        assert!(v.validate("+49 (30) 1234-567").is_ok());
        assert!(v.validate("0123456789").is_ok());
        assert!(v.validate("012345678").is_err());
        assert!(v.validate("012345678901234567890").is_err());
        assert!(v.validate("0123456789x").is_err());
        assert!(v.validate("0123.456.789").is_err());
    }

    #[test]
    fn test_person_name_validator() {
        let v = PersonNameValidator::new();
        assert!(v.validate("Al").is_ok());
        assert!(v.validate("Zoë O'Brien-Müller").is_ok());
        assert!(v.validate("A").is_err());
        assert!(v.validate("R2D2").is_err());
        assert!(v.validate(&"a".repeat(51)).is_err());
        assert!(v.validate(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^\d{5}$", "Enter a valid postal code.").unwrap();
        assert!(v.validate("10115").is_ok());
        assert!(v.validate("1011").is_err());
        assert_eq!(v.message(), "Enter a valid postal code.");
    }

    #[test]
    fn test_regex_validator_bad_pattern() {
        assert!(RegexValidator::new("(", "never").is_err());
    }
}
