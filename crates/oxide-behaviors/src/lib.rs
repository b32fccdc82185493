//! # oxide-behaviors
//!
//! Self-contained page behaviors and the [`Page`] controller that
//! initializes them once and routes events to them.
//!
//! This crate provides:
//! - [`InitState`], the one-time initialization guard
//! - [`Debouncer`] and [`Throttle`] driven by explicit instants
//! - the [`Behavior`] trait and one implementation per page module
//! - [`PageConfig`], every path, constant and message in one JSON document
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_behaviors::{Page, PageConfig};
//! use oxide_dom::{Document, Event, NodeSpec, PageSpec};
//! use tokio::time::Instant;
//!
//! let mut doc = Document::from_spec(
//!     &PageSpec::default()
//!         .body(NodeSpec::new("button").class("navbar-toggler"))
//!         .body(NodeSpec::new("div").class("navbar-collapse")),
//! );
//! let mut page = Page::from_config(PageConfig::default());
//! page.init(&mut doc);
//!
//! let toggler = doc.query_selector(".navbar-toggler").unwrap().unwrap();
//! let outcome = page.dispatch(&mut doc, &Event::click(toggler), Instant::now());
//! assert!(outcome.default_prevented);
//!
//! let menu = doc.query_selector(".navbar-collapse").unwrap().unwrap();
//! assert!(doc[menu].has_class("show"));
//! ```

mod behavior;
mod config;
mod error;
mod init;
pub mod modules;
mod page;
mod timing;

pub use behavior::{Behavior, EventContext};
pub use config::PageConfig;
pub use error::{ConfigError, Result};
pub use init::InitState;
pub use page::{DispatchOutcome, Page};
pub use timing::{Debouncer, Throttle};
