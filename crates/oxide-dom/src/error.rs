//! Error types for the document model.

use thiserror::Error;

/// Document-specific errors.
#[derive(Debug, Error)]
pub enum DomError {
    /// A selector could not be parsed.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A node id that does not belong to this document.
    #[error("unknown node: {0}")]
    UnknownNode(usize),

    /// Appending would create a cycle.
    #[error("cannot append node {child} under its own descendant {parent}")]
    HierarchyCycle { parent: usize, child: usize },

    /// A page fixture could not be decoded.
    #[error("failed to parse page fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DomError>;
