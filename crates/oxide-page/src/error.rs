//! Error types for scripts and reports.

use thiserror::Error;

/// Errors running a replay script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A step names a selector that matches nothing.
    #[error("step {step}: nothing matches {selector:?}")]
    NoMatch { step: usize, selector: String },

    /// A selector did not parse.
    #[error("step {step}: {source}")]
    Selector {
        step: usize,
        #[source]
        source: oxide_dom::DomError,
    },

    /// The script or a fixture is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scripts.
pub type Result<T> = std::result::Result<T, ScriptError>;
