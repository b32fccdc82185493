mod common;

use std::time::Duration;

use common::{contact_page, form, node, submit_button};
use oxide_forms::feedback::{clear_errors, has_visible_feedback, invalid_fields};
use oxide_forms::{
    BoxFuture, FieldState, FormController, FormData, SimulatedSubmitter, SubmissionOutcome,
    SubmitError, Submitter, SIMULATED_DELAY,
};
use tokio::time::Instant;

struct FailingSubmitter;

impl Submitter for FailingSubmitter {
    fn submit<'a>(&'a self, _data: &'a FormData) -> BoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async { Err(SubmitError::Rejected("503 Service Unavailable".to_string())) })
    }
}

#[tokio::test(start_paused = true)]
async fn test_valid_form_end_to_end() {
    let mut doc = contact_page("Al", "a@b.co", "1234567890");
    let form = form(&doc);
    let button = submit_button(&doc);
    let controller = FormController::default();

    let pending = controller
        .handle_submit(&mut doc, form)
        .expect("valid form starts a submission");

    // disabled before anything is awaited
    assert!(doc[button].disabled);
    assert_eq!(doc[button].attr("aria-busy"), Some("true"));
    assert!(doc.window.navigations.is_empty());

    let start = Instant::now();
    let result = SimulatedSubmitter::default().submit(&pending.payload).await;
    assert!(start.elapsed() >= SIMULATED_DELAY);

    let outcome = controller.complete_submission(&mut doc, pending, result);
    assert_eq!(outcome, SubmissionOutcome::Delivered);

    assert!(!doc[button].disabled);
    assert_eq!(doc.text_content(button), "Send message");
    assert!(!doc[form].has_class("was-validated"));
    assert!(doc.query_selector_all(".is-valid").unwrap().is_empty());
    assert!(doc.query_selector_all(".is-invalid").unwrap().is_empty());
    assert_eq!(doc.window.navigations, ["/thank_you.html"]);
    assert_eq!(doc.window.location, "/thank_you.html");
}

#[tokio::test(start_paused = true)]
async fn test_form_reset_restores_defaults() {
    let mut doc = contact_page("Al", "a@b.co", "1234567890");
    let form = form(&doc);
    let email = node(&doc, "input[name=\"email\"]");
    let newsletter = node(&doc, "input[name=\"newsletter\"]");
    doc[email].value = "someone@example.org".to_string();
    doc[newsletter].checked = true;

    let controller = FormController::default();
    let pending = controller.handle_submit(&mut doc, form).unwrap();
    let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
    assert_eq!(pending.payload.get("newsletter"), Some("yes"));
    let result = submitter.submit(&pending.payload).await;
    controller.complete_submission(&mut doc, pending, result);

    assert_eq!(doc[email].value, "a@b.co");
    assert!(!doc[newsletter].checked);
}

#[tokio::test(start_paused = true)]
async fn test_submit_form_runs_whole_flow() {
    let mut doc = contact_page("Al", "a@b.co", "1234567890");
    let form = form(&doc);
    let controller = FormController::default();

    let outcome = controller
        .submit_form(&mut doc, form, &SimulatedSubmitter::default())
        .await;
    assert_eq!(outcome, Some(SubmissionOutcome::Delivered));
    assert_eq!(doc.window.navigations.len(), 1);
}

#[tokio::test]
async fn test_failing_submitter_keeps_values() {
    let mut doc = contact_page("Al", "a@b.co", "1234567890");
    let form = form(&doc);
    let button = submit_button(&doc);
    let controller = FormController::default();

    let outcome = controller
        .submit_form(&mut doc, form, &FailingSubmitter)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Failed(SubmitError::Rejected("503 Service Unavailable".to_string()))
    );
    assert!(!doc[button].disabled);
    assert!(doc[form].has_class("submission-failed"));
    assert!(doc.query_selector(".form-feedback").unwrap().is_some());
    assert_eq!(doc[node(&doc, "input[name=\"email\"]")].value, "a@b.co");
    assert!(doc.window.navigations.is_empty());
}

#[test]
fn test_invalid_email_blocks_submission() {
    let mut doc = contact_page("Al", "not-an-email", "1234567890");
    let form = form(&doc);
    let email = node(&doc, "input[name=\"email\"]");
    let controller = FormController::default();

    assert!(controller.handle_submit(&mut doc, form).is_none());
    assert!(doc[email].has_class("is-invalid"));
    assert_eq!(
        oxide_forms::feedback::field_state(&doc, email),
        FieldState::Invalid {
            message: "Please enter a valid email address.".to_string()
        }
    );
    assert!(doc[form].has_class("was-validated"));
    assert!(!doc[submit_button(&doc)].disabled);
    assert!(doc.window.navigations.is_empty());
}

#[test]
fn test_resubmit_clears_stale_errors() {
    let mut doc = contact_page("", "a@b.co", "short");
    let form = form(&doc);
    let controller = FormController::default();

    assert!(controller.handle_submit(&mut doc, form).is_none());
    assert_eq!(invalid_fields(&doc, form).len(), 2);
    assert!(has_visible_feedback(&doc, form));

    let first = node(&doc, "input[name=\"firstName\"]");
    let message = node(&doc, "textarea");
    doc[first].value = "Al".to_string();
    doc[message].value = "A longer message".to_string();

    clear_errors(&mut doc, form);
    assert!(controller.validate_form(&mut doc, form));
    assert!(invalid_fields(&doc, form).is_empty());
    assert!(!has_visible_feedback(&doc, form));
    assert_eq!(doc.query_selector_all(".invalid-feedback").unwrap().len(), 2);
}
