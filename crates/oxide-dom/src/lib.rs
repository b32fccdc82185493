//! # oxide-dom
//!
//! Toolkit-agnostic document model used by the page behaviors.
//!
//! This crate provides:
//! - An element arena with class lists, attributes, inline style and form state
//! - A small CSS selector subset for querying
//! - Window state (location, viewport, navigation and scroll requests)
//! - Events and listener registrations
//! - JSON page fixtures
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_dom::{Document, Event, EventKind, ListenTarget, Listeners};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let button = doc.create_child(body, "button");
//! doc[button].add_class("navbar-toggler");
//!
//! let mut listeners = Listeners::new();
//! listeners.listen("menu", EventKind::Click, ListenTarget::Node(button), "toggle");
//!
//! let hits = listeners.matching(&doc, &Event::click(button));
//! assert_eq!(hits[0].handler, "toggle");
//! ```

mod document;
mod error;
mod event;
mod fixture;
mod listener;
mod node;
pub mod selector;
mod window;

pub use document::Document;
pub use error::{DomError, Result};
pub use event::{Event, EventKind};
pub use fixture::{NodeSpec, PageSpec};
pub use listener::{ListenTarget, Listener, Listeners, ObserveOptions};
pub use node::{Element, NodeId, Rect};
pub use selector::Selector;
pub use window::{ScrollBehavior, ScrollRequest, Window};
