//! Reflecting [`FieldState`] onto the document.
//!
//! Uses the Bootstrap 5 validation classes: `is-valid` / `is-invalid` on the
//! control, an `.invalid-feedback` slot in the control's parent, and
//! `was-validated` on the form.

use oxide_dom::{Document, NodeId, Selector};

use crate::engine::FieldState;

/// Class of a field whose last check passed.
pub const VALID_CLASS: &str = "is-valid";
/// Class of a field whose last check failed.
pub const INVALID_CLASS: &str = "is-invalid";
/// Class of the per-field message slot.
pub const FEEDBACK_CLASS: &str = "invalid-feedback";
/// Class put on a form after a failed submit attempt.
pub const VALIDATED_CLASS: &str = "was-validated";

fn feedback_slot(doc: &Document, field: NodeId) -> Option<NodeId> {
    let parent = doc.parent(field)?;
    doc.descendants(parent)
        .into_iter()
        .find(|id| doc[*id].has_class(FEEDBACK_CLASS))
}

/// Marks `field` invalid and shows `message` in its feedback slot, creating
/// the slot on first use.
pub fn mark_invalid(doc: &mut Document, field: NodeId, message: &str) {
    doc[field].add_class(INVALID_CLASS);
    doc[field].remove_class(VALID_CLASS);

    let slot = match feedback_slot(doc, field) {
        Some(slot) => slot,
        None => match doc.parent(field) {
            Some(parent) => {
                let slot = doc.create_child(parent, "div");
                doc[slot].add_class(FEEDBACK_CLASS);
                slot
            }
            None => return,
        },
    };
    doc.set_text_content(slot, message);
    doc[slot].set_style("display", "block");
}

/// Marks `field` valid and hides its feedback slot, keeping it for reuse.
pub fn mark_valid(doc: &mut Document, field: NodeId) {
    doc[field].remove_class(INVALID_CLASS);
    doc[field].add_class(VALID_CLASS);

    if let Some(slot) = feedback_slot(doc, field) {
        doc[slot].set_style("display", "none");
    }
}

/// Removes both markers and hides the feedback slot.
pub fn unmark(doc: &mut Document, field: NodeId) {
    doc[field].remove_class(INVALID_CLASS);
    doc[field].remove_class(VALID_CLASS);

    if let Some(slot) = feedback_slot(doc, field) {
        doc[slot].set_style("display", "none");
    }
}

/// Applies `state` to `field`.
pub fn apply_state(doc: &mut Document, field: NodeId, state: &FieldState) {
    match state {
        FieldState::Unmarked => unmark(doc, field),
        FieldState::Valid => mark_valid(doc, field),
        FieldState::Invalid { message } => mark_invalid(doc, field, message),
    }
}

/// Reads the state currently reflected on `field`.
pub fn field_state(doc: &Document, field: NodeId) -> FieldState {
    let el = &doc[field];
    if el.has_class(INVALID_CLASS) {
        let message = feedback_slot(doc, field)
            .map(|slot| doc.text_content(slot))
            .unwrap_or_default();
        FieldState::Invalid { message }
    } else if el.has_class(VALID_CLASS) {
        FieldState::Valid
    } else {
        FieldState::Unmarked
    }
}

/// Removes `is-invalid` from every field in `form` and hides every feedback
/// slot. Valid markers are left alone.
pub fn clear_errors(doc: &mut Document, form: NodeId) {
    for id in doc.descendants(form) {
        let el = &mut doc[id];
        el.remove_class(INVALID_CLASS);
        if el.has_class(FEEDBACK_CLASS) {
            el.set_style("display", "none");
        }
    }
}

/// Returns the fields of `form` currently marked invalid.
pub fn invalid_fields(doc: &Document, form: NodeId) -> Vec<NodeId> {
    doc.descendants(form)
        .into_iter()
        .filter(|id| doc[*id].has_class(INVALID_CLASS))
        .collect()
}

/// Returns whether a feedback slot in `form` is visible.
pub fn has_visible_feedback(doc: &Document, form: NodeId) -> bool {
    doc.descendants(form).into_iter().any(|id| {
        let el = &doc[id];
        el.has_class(FEEDBACK_CLASS) && el.style("display") != Some("none")
    })
}

/// Returns the `input, textarea, select` descendants of `scope`.
pub fn fields_of(doc: &Document, scope: NodeId) -> Vec<NodeId> {
    doc.descendants(scope)
        .into_iter()
        .filter(|id| matches!(doc[*id].tag(), "input" | "textarea" | "select"))
        .collect()
}

/// Returns the first element of `scope` matching `selector`.
pub(crate) fn first_within(doc: &Document, scope: NodeId, selector: &str) -> Option<NodeId> {
    let selector = Selector::parse(selector).ok()?;
    doc.select_within(scope, &selector).into_iter().next()
}
