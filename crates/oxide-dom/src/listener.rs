//! Listener registrations.
//!
//! Behaviors record what they listen to here instead of holding closures, so
//! the page controller can route events and tests can count registrations.

use crate::document::Document;
use crate::event::{Event, EventKind};
use crate::node::NodeId;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenTarget {
    Document,
    Window,
    Node(NodeId),
}

/// Visibility observer settings, forwarded to the host's intersection
/// observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserveOptions {
    /// Creates options with a threshold and root margin.
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }
}

/// One registered listener.
#[derive(Debug, Clone, PartialEq)]
pub struct Listener {
    /// Name of the owning behavior.
    pub owner: &'static str,
    /// Event kind listened to.
    pub kind: EventKind,
    /// Attachment point.
    pub target: ListenTarget,
    /// Handler label within the owner.
    pub handler: &'static str,
    /// Observer settings for intersection listeners.
    pub observe: Option<ObserveOptions>,
}

impl Listener {
    /// Returns whether this listener receives `event`.
    pub fn accepts(&self, doc: &Document, event: &Event) -> bool {
        let kind = event.kind();
        if self.kind != kind {
            return false;
        }
        match (self.target, event.target()) {
            (ListenTarget::Window, _) => kind.is_window_event(),
            (ListenTarget::Document, _) => kind.bubbles(),
            (ListenTarget::Node(node), Some(target)) => {
                node == target || (kind.bubbles() && doc.contains(node, target))
            }
            (ListenTarget::Node(_), None) => false,
        }
    }
}

/// Registry of listeners in registration order.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn listen(
        &mut self,
        owner: &'static str,
        kind: EventKind,
        target: ListenTarget,
        handler: &'static str,
    ) {
        self.entries.push(Listener {
            owner,
            kind,
            target,
            handler,
            observe: None,
        });
    }

    /// Registers an intersection observer on `node`.
    pub fn observe(
        &mut self,
        owner: &'static str,
        node: NodeId,
        handler: &'static str,
        options: ObserveOptions,
    ) {
        self.entries.push(Listener {
            owner,
            kind: EventKind::Intersection,
            target: ListenTarget::Node(node),
            handler,
            observe: Some(options),
        });
    }

    /// Stops observing `node` for `owner`.
    pub fn unobserve(&mut self, owner: &str, node: NodeId) {
        self.entries.retain(|l| {
            !(l.owner == owner
                && l.kind == EventKind::Intersection
                && l.target == ListenTarget::Node(node))
        });
    }

    /// Returns the listeners that receive `event`, in registration order.
    pub fn matching(&self, doc: &Document, event: &Event) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|l| l.accepts(doc, event))
            .cloned()
            .collect()
    }

    /// Returns all listeners.
    pub fn iter(&self) -> impl Iterator<Item = &Listener> {
        self.entries.iter()
    }

    /// Returns the number of listeners owned by `owner`.
    pub fn count_for(&self, owner: &str) -> usize {
        self.entries.iter().filter(|l| l.owner == owner).count()
    }

    /// Returns the total number of listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
