//! Wires validation and submission to form events.

use oxide_dom::{Document, NodeId};
use tracing::{debug, info, warn};

use crate::engine::{FieldState, FieldValidator};
use crate::feedback::{
    apply_state, clear_errors, fields_of, first_within, INVALID_CLASS, VALIDATED_CLASS,
    VALID_CLASS,
};
use crate::field::{FieldDescriptor, InputType};
use crate::submit::{FormData, SubmitError, Submitter};

/// Default destination after a successful submission.
pub const CONFIRMATION_PATH: &str = "/thank_you.html";

/// Class put on a form whose last submission failed.
pub const FAILED_CLASS: &str = "submission-failed";

/// Class of the form-level message slot.
pub const FORM_FEEDBACK_CLASS: &str = "form-feedback";

const SUBMIT_CONTROL: &str = "[type=\"submit\"]";

/// A submission between `begin_submission` and `complete_submission`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    /// The submitted form.
    pub form: NodeId,
    /// Its submit control.
    pub control: NodeId,
    /// Label of the control before the busy indicator replaced it.
    pub original_label: String,
    /// Values sent to the submitter.
    pub payload: FormData,
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Delivered; the form was reset and navigation requested.
    Delivered,
    /// The submitter failed; values are kept.
    Failed(SubmitError),
}

/// Validates fields against the document and runs the submission flow.
#[derive(Debug)]
pub struct FormController {
    validator: FieldValidator,
    confirmation_path: String,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FieldValidator::default())
    }
}

impl FormController {
    /// Creates a controller navigating to [`CONFIRMATION_PATH`] on success.
    pub fn new(validator: FieldValidator) -> Self {
        Self {
            validator,
            confirmation_path: CONFIRMATION_PATH.to_string(),
        }
    }

    /// Sets the navigation target after a successful submission.
    #[must_use]
    pub fn confirmation_path(mut self, path: impl Into<String>) -> Self {
        self.confirmation_path = path.into();
        self
    }

    /// Returns the validator.
    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// Validates one field and marks it. Non-field nodes count as valid.
    pub fn validate_field(&self, doc: &mut Document, field: NodeId) -> bool {
        let Some(descriptor) = FieldDescriptor::from_element(doc, field) else {
            return true;
        };
        let state = self.validator.state(&descriptor);
        if let FieldState::Invalid { message } = &state {
            debug!(field = descriptor.key(), %message, "field invalid");
        }
        apply_state(doc, field, &state);
        state.is_valid()
    }

    /// Validates every field of `form`, marking each one.
    pub fn validate_form(&self, doc: &mut Document, form: NodeId) -> bool {
        let mut valid = true;
        for field in fields_of(doc, form) {
            if !self.validate_field(doc, field) {
                valid = false;
            }
        }
        valid
    }

    /// Handles a submit event: clears stale errors, validates, then either
    /// starts the submission or flags the form as validated.
    ///
    /// A form whose submit control is still busy ignores the event.
    pub fn handle_submit(&self, doc: &mut Document, form: NodeId) -> Option<PendingSubmission> {
        if is_submitting(doc, form) {
            debug!(%form, "submission in flight, submit ignored");
            return None;
        }
        clear_errors(doc, form);
        if self.validate_form(doc, form) {
            self.begin_submission(doc, form)
        } else {
            doc[form].add_class(VALIDATED_CLASS);
            None
        }
    }

    /// Handles a blur event.
    pub fn handle_blur(&self, doc: &mut Document, field: NodeId) {
        self.validate_field(doc, field);
    }

    /// Handles an input event: re-checks only fields already marked invalid.
    pub fn handle_input(&self, doc: &mut Document, field: NodeId) {
        if doc[field].has_class(INVALID_CLASS) {
            self.validate_field(doc, field);
        }
    }

    /// Disables the submit control and shows the busy indicator.
    ///
    /// Returns `None` when the form has no submit control or the control is
    /// already disabled.
    pub fn begin_submission(&self, doc: &mut Document, form: NodeId) -> Option<PendingSubmission> {
        let Some(control) = first_within(doc, form, SUBMIT_CONTROL) else {
            debug!(%form, "no submit control, submission skipped");
            return None;
        };
        if doc[control].disabled {
            debug!(%form, "submit control disabled, submission skipped");
            return None;
        }
        let payload = match FormData::from_form(doc, form) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%form, error = %err, "cannot collect form data");
                return None;
            }
        };

        let original_label = doc.text_content(control);
        doc[control].disabled = true;
        doc[control].set_attr("aria-busy", "true");
        doc.set_text_content(control, "");
        let spinner = doc.create_child(control, "span");
        for class in ["spinner-border", "spinner-border-sm", "me-2"] {
            doc[spinner].add_class(class);
        }
        let label = doc.create_child(control, "span");
        doc.set_text_content(label, self.validator.messages().busy_label.as_str());

        debug!(%form, fields = payload.fields.len(), "submission started");
        Some(PendingSubmission {
            form,
            control,
            original_label,
            payload,
        })
    }

    /// Restores the submit control and applies the submitter's result.
    pub fn complete_submission(
        &self,
        doc: &mut Document,
        pending: PendingSubmission,
        result: Result<(), SubmitError>,
    ) -> SubmissionOutcome {
        let PendingSubmission {
            form,
            control,
            original_label,
            ..
        } = pending;

        doc[control].disabled = false;
        doc[control].remove_attr("aria-busy");
        doc.set_text_content(control, original_label);

        match result {
            Ok(()) => {
                reset_form(doc, form);
                doc[form].remove_class(VALIDATED_CLASS);
                doc[form].remove_class(FAILED_CLASS);
                for id in doc.descendants(form) {
                    doc[id].remove_class(VALID_CLASS);
                    if doc[id].has_class(FORM_FEEDBACK_CLASS) {
                        doc[id].set_style("display", "none");
                    }
                }
                info!(%form, path = %self.confirmation_path, "submission delivered");
                doc.window.navigate(self.confirmation_path.as_str());
                SubmissionOutcome::Delivered
            }
            Err(err) => {
                warn!(%form, error = %err, "submission failed");
                doc[form].add_class(FAILED_CLASS);
                let slot = match first_within(doc, form, ".form-feedback") {
                    Some(slot) => slot,
                    None => {
                        let slot = doc.create_child(form, "div");
                        doc[slot].add_class(FORM_FEEDBACK_CLASS);
                        doc[slot].set_attr("role", "alert");
                        slot
                    }
                };
                doc.set_text_content(slot, self.validator.messages().submit_failed.as_str());
                doc[slot].set_style("display", "block");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    /// Runs a whole submission of a validated form: begin, await the
    /// submitter, complete.
    pub async fn submit_form(
        &self,
        doc: &mut Document,
        form: NodeId,
        submitter: &dyn Submitter,
    ) -> Option<SubmissionOutcome> {
        let pending = self.begin_submission(doc, form)?;
        let result = submitter.submit(&pending.payload).await;
        Some(self.complete_submission(doc, pending, result))
    }
}

/// Returns whether the submit control of `form` is busy.
fn is_submitting(doc: &Document, form: NodeId) -> bool {
    first_within(doc, form, SUBMIT_CONTROL).is_some_and(|control| doc[control].disabled)
}

/// Restores every field of `form` to its default value and removes all
/// validation markers.
pub fn reset_form(doc: &mut Document, form: NodeId) {
    for field in fields_of(doc, form) {
        let is_submit = FieldDescriptor::from_element(doc, field)
            .is_some_and(|d| d.input_type == InputType::Submit);
        let el = &mut doc[field];
        if !is_submit {
            el.value = el.default_value.clone();
        }
        el.checked = el.default_checked;
        el.remove_class(INVALID_CLASS);
    }
}
