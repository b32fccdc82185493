//! Submission capability.
//!
//! The controller hands the serialized form to a [`Submitter`] and branches
//! on its result. [`SimulatedSubmitter`] waits a fixed delay and succeeds;
//! real transports implement the trait themselves.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use oxide_dom::{Document, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::{FormError, Result};
use crate::feedback::fields_of;
use crate::field::{FieldDescriptor, InputType};

/// A boxed future for async submission.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Delay of the simulated submission.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Errors reported by a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// No answer within the allowed time.
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    /// The transport failed.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Submitted values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub fields: BTreeMap<String, String>,
}

impl FormData {
    /// Collects the values of `form`.
    ///
    /// Unchecked checkboxes and radios, submit inputs and unnamed controls
    /// are skipped. A checked box without a value submits `on`.
    pub fn from_form(doc: &Document, form: NodeId) -> Result<Self> {
        if doc.get(form).map(|el| el.tag()) != Some("form") {
            return Err(FormError::NotAForm(form));
        }

        let mut fields = BTreeMap::new();
        for node in fields_of(doc, form) {
            let Some(field) = FieldDescriptor::from_element(doc, node) else {
                continue;
            };
            let key = field.key().to_string();
            if key.is_empty() {
                continue;
            }
            match field.input_type {
                InputType::Submit => continue,
                InputType::Checkbox | InputType::Radio if !field.checked => continue,
                InputType::Checkbox | InputType::Radio if field.value.is_empty() => {
                    fields.insert(key, "on".to_string());
                }
                _ => {
                    fields.insert(key, field.value);
                }
            }
        }
        Ok(Self { fields })
    }

    /// Returns a submitted value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Encodes the values as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

/// Delivers a form somewhere.
pub trait Submitter: Send + Sync {
    /// Submits `data`, resolving once the outcome is known.
    fn submit<'a>(&'a self, data: &'a FormData) -> BoxFuture<'a, std::result::Result<(), SubmitError>>;
}

/// Waits a fixed delay, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

impl SimulatedSubmitter {
    /// Creates a submitter with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit<'a>(&'a self, data: &'a FormData) -> BoxFuture<'a, std::result::Result<(), SubmitError>> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            debug!(fields = data.fields.len(), "simulated submission delivered");
            Ok(())
        })
    }
}

/// Fails a wrapped submitter that does not answer within `limit`.
#[derive(Debug, Clone)]
pub struct TimeoutSubmitter<S> {
    inner: S,
    limit: Duration,
}

impl<S: Submitter> TimeoutSubmitter<S> {
    /// Wraps `inner` with a time limit.
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

impl<S: Submitter> Submitter for TimeoutSubmitter<S> {
    fn submit<'a>(&'a self, data: &'a FormData) -> BoxFuture<'a, std::result::Result<(), SubmitError>> {
        Box::pin(async move {
            match tokio::time::timeout(self.limit, self.inner.submit(data)).await {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Timeout(self.limit)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_dom::{NodeSpec, PageSpec};
    use tokio::time::Instant;

    fn contact_form() -> Document {
        Document::from_spec(
            &PageSpec::default().body(
                NodeSpec::new("form")
                    .child(NodeSpec::new("input").attr("name", "firstName").value("Al"))
                    .child(
                        NodeSpec::new("input")
                            .attr("name", "privacy")
                            .attr("type", "checkbox")
                            .checked(),
                    )
                    .child(
                        NodeSpec::new("input")
                            .attr("name", "newsletter")
                            .attr("type", "checkbox")
                            .value("yes"),
                    )
                    .child(NodeSpec::new("textarea").id("message").value("Hello there!"))
                    .child(NodeSpec::new("input").attr("type", "submit").attr("name", "send")),
            ),
        )
    }

    #[test]
    fn test_form_data_collects_values() {
        let doc = contact_form();
        let form = doc.query_selector("form").unwrap().unwrap();
        let data = FormData::from_form(&doc, form).unwrap();

        assert_eq!(data.get("firstName"), Some("Al"));
        assert_eq!(data.get("privacy"), Some("on"));
        assert_eq!(data.get("newsletter"), None);
        assert_eq!(data.get("message"), Some("Hello there!"));
        assert_eq!(data.get("send"), None);
        assert_eq!(
            data.to_json().unwrap(),
            r#"{"firstName":"Al","message":"Hello there!","privacy":"on"}"#
        );
    }

    #[test]
    fn test_form_data_requires_form() {
        let doc = contact_form();
        let body = doc.body();
        assert!(matches!(
            FormData::from_form(&doc, body),
            Err(FormError::NotAForm(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits() {
        let start = Instant::now();
        let result = SimulatedSubmitter::default().submit(&FormData::default()).await;
        assert!(result.is_ok());
        assert!(start.elapsed() >= SIMULATED_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_submitter() {
        let slow = SimulatedSubmitter::new(Duration::from_secs(30));
        let submitter = TimeoutSubmitter::new(slow, Duration::from_secs(5));
        let result = submitter.submit(&FormData::default()).await;
        assert_eq!(result, Err(SubmitError::Timeout(Duration::from_secs(5))));

        let fast = TimeoutSubmitter::new(SimulatedSubmitter::default(), Duration::from_secs(5));
        assert!(fast.submit(&FormData::default()).await.is_ok());
    }
}
