//! # oxide-forms
//!
//! Rule-based field validation and the form submission flow for page
//! forms, with Bootstrap 5 validation markers.
//!
//! This crate provides:
//! - [`FieldValidator`], the engine deciding pass or fail per field
//! - a [`RuleSet`] table of [`ValidationRule`]s that can be extended
//! - feedback marking on an [`oxide_dom::Document`]
//! - [`FormController`], wiring submit, blur and input events
//! - the [`Submitter`] capability with a simulated default
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_forms::{FieldDescriptor, FieldState, FieldValidator, InputType};
//!
//! let validator = FieldValidator::default();
//!
//! let name = FieldDescriptor::input("firstName", InputType::Text)
//!     .required()
//!     .value("Al");
//! assert_eq!(validator.state(&name), FieldState::Valid);
//!
//! let phone = FieldDescriptor::input("phone", InputType::Tel).value("123");
//! assert!(validator.state(&phone).is_invalid());
//!
//! // optional and empty
//! let company = FieldDescriptor::input("company", InputType::Text);
//! assert!(validator.check(&company).is_ok());
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use oxide_forms::{FieldDescriptor, FieldMatcher, FieldValidator, InputType, ValidationRule};
//! use oxide_forms::validation::RegexValidator;
//!
//! let validator = FieldValidator::default().rule(ValidationRule::new(
//!     FieldMatcher::Name("zip".to_string()),
//!     RegexValidator::new(r"^\d{5}$", "Enter a five digit postal code.").unwrap(),
//! ));
//!
//! let zip = FieldDescriptor::input("zip", InputType::Text).value("1234");
//! assert!(validator.check(&zip).is_err());
//! ```

mod controller;
mod engine;
mod error;
pub mod feedback;
mod field;
mod messages;
mod rules;
mod submit;
pub mod validation;

pub use controller::{
    reset_form, FormController, PendingSubmission, SubmissionOutcome, CONFIRMATION_PATH,
    FAILED_CLASS, FORM_FEEDBACK_CLASS,
};
pub use engine::{FieldState, FieldValidator};
pub use error::{FormError, Result, ValidationErrors, ValidationFailure};
pub use field::{FieldDescriptor, InputType, TagKind};
pub use messages::Messages;
pub use rules::{FieldMatcher, RuleSet, ValidationRule, MESSAGE_MIN_LENGTH};
pub use submit::{
    BoxFuture, FormData, SimulatedSubmitter, SubmitError, Submitter, TimeoutSubmitter,
    SIMULATED_DELAY,
};
