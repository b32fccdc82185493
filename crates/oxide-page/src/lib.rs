//! # oxide-page
//!
//! Library side of the `oxide-page` command: headless field validation and
//! replay of timed event scripts against page fixtures.

mod error;
pub mod script;
pub mod validate;

pub use error::{Result, ScriptError};
pub use script::{parse_script, replay, Action, ReplaySummary, Step};
pub use validate::{parse_fields, validate_fields, FieldReport};
