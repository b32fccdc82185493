//! Input events delivered by the host page.

use std::fmt;

use crate::node::NodeId;

/// Discriminant of an [`Event`], used for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Blur,
    Input,
    KeyDown,
    MouseEnter,
    Scroll,
    Resize,
    Intersection,
}

impl EventKind {
    /// Returns whether the event propagates from its target to ancestors
    /// and the document.
    pub fn bubbles(self) -> bool {
        matches!(self, Self::Click | Self::Submit | Self::Input | Self::KeyDown)
    }

    /// Returns whether the event is fired at the window.
    pub fn is_window_event(self) -> bool {
        matches!(self, Self::Scroll | Self::Resize)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Blur => "blur",
            Self::Input => "input",
            Self::KeyDown => "keydown",
            Self::MouseEnter => "mouseenter",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Intersection => "intersection",
        };
        f.write_str(name)
    }
}

/// An event raised by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer click at client coordinates.
    Click { target: NodeId, x: f64, y: f64 },
    /// Form submission.
    Submit { form: NodeId },
    /// A field lost focus.
    Blur { target: NodeId },
    /// A field's value changed.
    Input { target: NodeId },
    /// Key press; `key` uses DOM key names such as `Escape`.
    KeyDown { key: String },
    /// Pointer entered an element.
    MouseEnter { target: NodeId },
    /// The window scrolled to `offset`.
    Scroll { offset: f64 },
    /// The viewport was resized to `width`.
    Resize { width: f64 },
    /// An observed element crossed its visibility threshold.
    Intersection {
        target: NodeId,
        is_intersecting: bool,
    },
}

impl Event {
    /// Creates a click at the origin.
    pub fn click(target: NodeId) -> Self {
        Self::Click {
            target,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Creates an intersection entry that became visible.
    pub fn visible(target: NodeId) -> Self {
        Self::Intersection {
            target,
            is_intersecting: true,
        }
    }

    /// Returns the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Submit { .. } => EventKind::Submit,
            Self::Blur { .. } => EventKind::Blur,
            Self::Input { .. } => EventKind::Input,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::MouseEnter { .. } => EventKind::MouseEnter,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
            Self::Intersection { .. } => EventKind::Intersection,
        }
    }

    /// Returns the element the event was fired at, if any.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Click { target, .. }
            | Self::Blur { target }
            | Self::Input { target }
            | Self::MouseEnter { target }
            | Self::Intersection { target, .. } => Some(*target),
            Self::Submit { form } => Some(*form),
            Self::KeyDown { .. } | Self::Scroll { .. } | Self::Resize { .. } => None,
        }
    }
}
