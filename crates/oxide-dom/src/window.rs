//! Window state: location, viewport and the requests behaviors make of the host.

use serde::Serialize;

/// How a scroll request should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// A request to scroll the viewport to an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Browser window state seen by behaviors.
#[derive(Debug, Clone, Serialize)]
pub struct Window {
    /// Current path name.
    pub location: String,
    /// Vertical scroll offset.
    pub scroll_y: f64,
    /// Viewport width.
    pub inner_width: f64,
    /// Navigations requested, in order.
    pub navigations: Vec<String>,
    /// Scroll requests, in order.
    pub scroll_requests: Vec<ScrollRequest>,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            location: "/".to_string(),
            scroll_y: 0.0,
            inner_width: 1280.0,
            navigations: Vec::new(),
            scroll_requests: Vec::new(),
        }
    }
}

impl Window {
    /// Requests navigation to `path`.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(%path, "navigation requested");
        self.location.clone_from(&path);
        self.navigations.push(path);
    }

    /// Requests a scroll to `top`.
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.push(ScrollRequest { top, behavior });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_records_request() {
        let mut window = Window::default();
        window.navigate("/thank_you.html");
        assert_eq!(window.location, "/thank_you.html");
        assert_eq!(window.navigations, ["/thank_you.html"]);
    }
}
