//! One-time initialization flags.

use std::collections::BTreeSet;

use tracing::debug;

/// Records which behaviors have been initialized.
///
/// A flag is created by the first [`ensure_once`](Self::ensure_once) call
/// for its name and never reset.
#[derive(Debug, Clone, Default)]
pub struct InitState {
    flags: BTreeSet<String>,
}

impl InitState {
    /// Creates a state with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records `name` on the first call, `false` on
    /// every later call with the same name.
    pub fn ensure_once(&mut self, name: &str) -> bool {
        if self.flags.contains(name) {
            debug!(module = name, "already initialized, skipping");
            return false;
        }
        self.flags.insert(name.to_string());
        true
    }

    /// Returns whether `name` has been initialized.
    pub fn is_initialized(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns the initialized names, sorted.
    pub fn initialized(&self) -> Vec<&str> {
        self.flags.iter().map(String::as_str).collect()
    }
}
