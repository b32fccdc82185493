//! Declarative page fixtures.
//!
//! A [`PageSpec`] describes a page as nested [`NodeSpec`]s. It can be read
//! from JSON or built in code:
//!
//! ```rust
//! use oxide_dom::{Document, NodeSpec, PageSpec};
//!
//! let page = PageSpec::new("/contact.html").body(
//!     NodeSpec::new("form")
//!         .class("c-form")
//!         .child(NodeSpec::new("input").attr("name", "email").attr("required", "")),
//! );
//! let doc = Document::from_spec(&page);
//! assert_eq!(doc.query_selector_all("input[required]").unwrap().len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;
use crate::node::{NodeId, Rect};

/// One element and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub rect: Option<Rect>,
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Creates a spec for `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the initial form value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Marks a checkbox as initially checked.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Sets the layout box.
    #[must_use]
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

fn default_location() -> String {
    "/".to_string()
}

fn default_width() -> f64 {
    1280.0
}

/// A whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_width")]
    pub inner_width: f64,
    #[serde(default)]
    pub head: Vec<NodeSpec>,
    #[serde(default)]
    pub body: Vec<NodeSpec>,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(default_location())
    }
}

impl PageSpec {
    /// Creates an empty page at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            inner_width: default_width(),
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Parses a page from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends a body element.
    #[must_use]
    pub fn body(mut self, node: NodeSpec) -> Self {
        self.body.push(node);
        self
    }

    /// Appends a head element.
    #[must_use]
    pub fn head(mut self, node: NodeSpec) -> Self {
        self.head.push(node);
        self
    }

    /// Sets the viewport width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.inner_width = width;
        self
    }
}

impl Document {
    /// Builds a document from a page spec.
    pub fn from_spec(spec: &PageSpec) -> Self {
        let mut doc = Self::new();
        doc.window.location.clone_from(&spec.location);
        doc.window.inner_width = spec.inner_width;
        let (head, body) = (doc.head(), doc.body());
        for node in &spec.head {
            doc.append_spec(head, node);
        }
        for node in &spec.body {
            doc.append_spec(body, node);
        }
        doc
    }

    /// Builds `spec` and appends it under `parent`.
    pub fn append_spec(&mut self, parent: NodeId, spec: &NodeSpec) -> NodeId {
        let id = self.create_child(parent, &spec.tag);
        let el = &mut self[id];
        for (name, value) in &spec.attrs {
            el.set_attr(name.as_str(), value.as_str());
        }
        if let Some(html_id) = &spec.id {
            el.set_attr("id", html_id.as_str());
        }
        for class in &spec.classes {
            el.add_class(class);
        }
        el.text.clone_from(&spec.text);
        el.value.clone_from(&spec.value);
        el.default_value.clone_from(&spec.value);
        el.checked = spec.checked;
        el.default_checked = spec.checked;
        if let Some(rect) = spec.rect {
            el.rect = rect;
        }
        for child in &spec.children {
            self.append_spec(id, child);
        }
        id
    }
}
