//! Page configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;
use std::time::Duration;

use oxide_forms::Messages;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Paths, timing constants and copy used by the behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Navigation target after a delivered form.
    pub confirmation_path: String,
    /// Navigation target of `#privacy` links.
    pub privacy_path: String,
    /// Delay of the simulated submitter, in milliseconds.
    pub submit_delay_ms: u64,
    /// Viewport width at which the mobile menu closes itself.
    pub menu_breakpoint: f64,
    /// Resize debounce of the mobile menu, in milliseconds.
    pub resize_debounce_ms: u64,
    /// Header height used when the page has no `header`.
    pub fallback_header_height: f64,
    /// Extra gap above smooth-scroll targets.
    pub scroll_gap: f64,
    /// Scroll handler throttle of the scroll-to-top button, in milliseconds.
    pub scroll_throttle_ms: u64,
    /// Offset past which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Lifetime of a click ripple, in milliseconds.
    pub ripple_ms: u64,
    /// Duration of a count-up animation, in milliseconds.
    pub count_duration_ms: u64,
    /// Frame interval of a count-up animation, in milliseconds.
    pub count_frame_ms: u64,
    /// Label of the scroll-to-top button for assistive technology.
    pub scroll_top_label: String,
    /// Validation and submission copy.
    pub messages: Messages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            confirmation_path: oxide_forms::CONFIRMATION_PATH.to_string(),
            privacy_path: "/privacy.html".to_string(),
            submit_delay_ms: 1500,
            menu_breakpoint: 992.0,
            resize_debounce_ms: 250,
            fallback_header_height: 72.0,
            scroll_gap: 20.0,
            scroll_throttle_ms: 100,
            scroll_top_threshold: 300.0,
            ripple_ms: 600,
            count_duration_ms: 2000,
            count_frame_ms: 16,
            scroll_top_label: "Scroll to top".to_string(),
            messages: Messages::default(),
        }
    }
}

impl PageConfig {
    /// Parses a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading page config");
        Self::from_json(&json)
    }

    fn check(&self) -> Result<()> {
        if self.count_frame_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "count_frame_ms",
                reason: "must be positive".to_string(),
            });
        }
        if !self.confirmation_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "confirmation_path",
                reason: format!("{:?} is not an absolute path", self.confirmation_path),
            });
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn ripple_lifetime(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn count_duration(&self) -> Duration {
        Duration::from_millis(self.count_duration_ms)
    }

    pub fn count_frame(&self) -> Duration {
        Duration::from_millis(self.count_frame_ms)
    }
}
