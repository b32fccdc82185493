//! Timed event scripts replayed against a page fixture.
//!
//! A script is a JSON array of steps. Each step has an offset `at` in
//! milliseconds from the start and a `type`:
//!
//! ```json
//! [
//!   {"at": 0, "type": "input", "selector": "input[name=\"email\"]", "value": "a@b.co"},
//!   {"at": 10, "type": "submit", "selector": "form"},
//!   {"at": 300, "type": "scroll", "offset": 800}
//! ]
//! ```
//!
//! Queued submissions complete once `submit_delay` has passed on the script
//! clock since the most recent one started, so a later step sees the
//! restored form. Whatever is still queued after the last step completes
//! at the end.

use std::time::Duration;

use oxide_behaviors::Page;
use oxide_dom::{Document, Event, NodeId, ScrollRequest};
use oxide_forms::feedback::INVALID_CLASS;
use oxide_forms::{FieldDescriptor, SubmissionOutcome};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{Result, ScriptError};

/// What a step does.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Click {
        selector: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Submit {
        selector: String,
    },
    Blur {
        selector: String,
    },
    /// Sets the value, then fires `input`.
    Input {
        selector: String,
        value: String,
    },
    KeyDown {
        key: String,
    },
    MouseEnter {
        selector: String,
    },
    Scroll {
        offset: f64,
    },
    Resize {
        width: f64,
    },
    Visible {
        selector: String,
        #[serde(default = "default_true")]
        is_intersecting: bool,
    },
    /// Only advances the clock.
    Wait,
}

fn default_true() -> bool {
    true
}

/// One timed step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Milliseconds from the start of the replay.
    #[serde(default)]
    pub at: u64,
    #[serde(flatten)]
    pub action: Action,
}

/// Parses a JSON script.
pub fn parse_script(json: &str) -> Result<Vec<Step>> {
    Ok(serde_json::from_str(json)?)
}

/// What the page did during a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub location: String,
    pub navigations: Vec<String>,
    pub scroll_requests: Vec<ScrollRequest>,
    /// Keys of the fields marked invalid at the end.
    pub invalid_fields: Vec<String>,
    pub prevented_defaults: usize,
    pub submissions_delivered: usize,
    pub submissions_failed: usize,
}

fn resolve(doc: &Document, step: usize, selector: &str) -> Result<NodeId> {
    doc.query_selector(selector)
        .map_err(|source| ScriptError::Selector { step, source })?
        .ok_or_else(|| ScriptError::NoMatch {
            step,
            selector: selector.to_string(),
        })
}

fn to_event(doc: &mut Document, step: usize, action: &Action) -> Result<Option<Event>> {
    let event = match action {
        Action::Click { selector, x, y } => Event::Click {
            target: resolve(doc, step, selector)?,
            x: *x,
            y: *y,
        },
        Action::Submit { selector } => Event::Submit {
            form: resolve(doc, step, selector)?,
        },
        Action::Blur { selector } => Event::Blur {
            target: resolve(doc, step, selector)?,
        },
        Action::Input { selector, value } => {
            let target = resolve(doc, step, selector)?;
            doc[target].value = value.clone();
            Event::Input { target }
        }
        Action::KeyDown { key } => Event::KeyDown { key: key.clone() },
        Action::MouseEnter { selector } => Event::MouseEnter {
            target: resolve(doc, step, selector)?,
        },
        Action::Scroll { offset } => Event::Scroll { offset: *offset },
        Action::Resize { width } => Event::Resize { width: *width },
        Action::Visible {
            selector,
            is_intersecting,
        } => Event::Intersection {
            target: resolve(doc, step, selector)?,
            is_intersecting: *is_intersecting,
        },
        Action::Wait => return Ok(None),
    };
    Ok(Some(event))
}

/// Runs `steps` against an initialized page, then completes queued
/// submissions.
///
/// Steps run in `at` order; timers are pumped before each step and once
/// more after the last one. `submit_delay` is how long a submission takes
/// on the script clock.
pub async fn replay(
    page: &mut Page,
    doc: &mut Document,
    steps: &[Step],
    submit_delay: Duration,
) -> Result<ReplaySummary> {
    let start = Instant::now();
    let mut ordered: Vec<(usize, &Step)> = steps.iter().enumerate().collect();
    ordered.sort_by_key(|(_, step)| step.at);

    let mut prevented_defaults = 0;
    let mut outcomes = Vec::new();
    let mut submitted_at: Option<Instant> = None;
    let mut last = start;
    for (index, step) in ordered {
        let now = start + Duration::from_millis(step.at);
        if submitted_at.is_some_and(|at| at + submit_delay <= now) {
            outcomes.extend(page.flush_submissions(doc).await);
            submitted_at = None;
        }
        page.tick(doc, now);
        if let Some(event) = to_event(doc, index, &step.action)? {
            let outcome = page.dispatch(doc, &event, now);
            debug!(step = index, kind = %event.kind(), handled = outcome.handled, "step replayed");
            if outcome.default_prevented {
                prevented_defaults += 1;
            }
            if outcome.submissions_started > 0 {
                submitted_at = Some(now);
            }
        }
        last = now;
    }
    page.tick(doc, last);

    outcomes.extend(page.flush_submissions(doc).await);
    let submissions_delivered = outcomes
        .iter()
        .filter(|o| matches!(o, SubmissionOutcome::Delivered))
        .count();

    let invalid_fields = doc
        .query_selector_all("input, textarea, select")
        .unwrap_or_default()
        .into_iter()
        .filter(|&id| doc[id].has_class(INVALID_CLASS))
        .filter_map(|id| FieldDescriptor::from_element(doc, id))
        .map(|field| field.key().to_string())
        .collect();

    Ok(ReplaySummary {
        location: doc.window.location.clone(),
        navigations: doc.window.navigations.clone(),
        scroll_requests: doc.window.scroll_requests.clone(),
        invalid_fields,
        prevented_defaults,
        submissions_delivered,
        submissions_failed: outcomes.len() - submissions_delivered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_behaviors::PageConfig;
    use oxide_dom::{NodeSpec, PageSpec};

    fn contact_page() -> Document {
        Document::from_spec(
            &PageSpec::new("/contact.html").body(
                NodeSpec::new("form")
                    .class("needs-validation")
                    .child(
                        NodeSpec::new("div").child(
                            NodeSpec::new("input")
                                .attr("name", "email")
                                .attr("type", "email")
                                .attr("required", ""),
                        ),
                    )
                    .child(NodeSpec::new("button").attr("type", "submit").text("Send")),
            ),
        )
    }

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn test_parse_script() {
        let steps = parse_script(
            r#"[
                {"at": 5, "type": "click", "selector": "a"},
                {"type": "key_down", "key": "Escape"},
                {"at": 300, "type": "wait"}
            ]"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0].action,
            Action::Click {
                selector: "a".to_string(),
                x: 0.0,
                y: 0.0
            }
        );
        assert_eq!(steps[1].at, 0);
        assert_eq!(steps[2].action, Action::Wait);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_invalid_then_fixed() {
        let mut doc = contact_page();
        let mut page = Page::from_config(PageConfig::default());
        page.init(&mut doc);

        let steps = parse_script(
            r#"[
                {"at": 0, "type": "input", "selector": "input", "value": "nope"},
                {"at": 10, "type": "submit", "selector": "form"}
            ]"#,
        )
        .unwrap();
        let summary = replay(&mut page, &mut doc, &steps, DELAY).await.unwrap();
        assert_eq!(summary.invalid_fields, ["email"]);
        assert_eq!(summary.prevented_defaults, 1);
        assert_eq!(summary.submissions_delivered, 0);

        let steps = parse_script(
            r#"[
                {"at": 0, "type": "input", "selector": "input", "value": "a@b.co"},
                {"at": 10, "type": "submit", "selector": "form"}
            ]"#,
        )
        .unwrap();
        let summary = replay(&mut page, &mut doc, &steps, DELAY).await.unwrap();
        assert!(summary.invalid_fields.is_empty());
        assert_eq!(summary.submissions_delivered, 1);
        assert_eq!(summary.location, "/thank_you.html");
        assert_eq!(summary.navigations, ["/thank_you.html"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_step_sees_completed_submission() {
        let mut doc = contact_page();
        let mut page = Page::from_config(PageConfig::default());
        page.init(&mut doc);

        let steps = parse_script(
            r#"[
                {"at": 0, "type": "input", "selector": "input", "value": "a@b.co"},
                {"at": 10, "type": "submit", "selector": "form"},
                {"at": 1000, "type": "submit", "selector": "form"},
                {"at": 5000, "type": "input", "selector": "input", "value": "c@d.de"},
                {"at": 5010, "type": "submit", "selector": "form"}
            ]"#,
        )
        .unwrap();
        let summary = replay(&mut page, &mut doc, &steps, DELAY).await.unwrap();

        // the submit at 1000 hits the busy form, the one at 5010 does not
        assert_eq!(summary.submissions_delivered, 2);
        assert_eq!(summary.navigations, ["/thank_you.html", "/thank_you.html"]);
        let button = doc.query_selector("button").unwrap().unwrap();
        assert!(!doc[button].disabled);
        assert_eq!(doc.text_content(button), "Send");
    }

    #[tokio::test]
    async fn test_unknown_selector_is_reported() {
        let mut doc = contact_page();
        let mut page = Page::from_config(PageConfig::default());
        page.init(&mut doc);

        let steps = parse_script(r##"[{"type": "click", "selector": "#missing"}]"##).unwrap();
        let err = replay(&mut page, &mut doc, &steps, DELAY).await.unwrap_err();
        assert!(matches!(err, ScriptError::NoMatch { step: 0, .. }));
    }
}
