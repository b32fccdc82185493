//! Elements stored in a [`Document`](crate::Document) arena.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to an element inside one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Layout box of an element, in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rect.
    #[must_use]
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// A single element: tag, attributes, classes, inline style and form state.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    /// Text content.
    pub text: String,
    /// Current form value (inputs, textareas, selects).
    pub value: String,
    /// Value restored by a form reset.
    pub default_value: String,
    /// Checked state of checkboxes and radios.
    pub checked: bool,
    /// Checked state restored by a form reset.
    pub default_checked: bool,
    /// Disabled state of form controls.
    pub disabled: bool,
    /// Layout box reported by the host.
    pub rect: Rect,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            default_value: String::new(),
            checked: false,
            default_checked: false,
            disabled: false,
            rect: Rect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns an attribute value.
    ///
    /// `class` is answered from the class list.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns whether the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        if name == "class" {
            return !self.classes.is_empty();
        }
        self.attrs.contains_key(name)
    }

    /// Sets an attribute. Setting `class` replaces the class list.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            self.classes.clear();
            for class in value.split_whitespace() {
                self.add_class(class);
            }
            return;
        }
        self.attrs.insert(name, value);
    }

    /// Removes an attribute.
    pub fn remove_attr(&mut self, name: &str) {
        if name == "class" {
            self.classes.clear();
        } else {
            self.attrs.remove(name);
        }
    }

    /// Returns all attributes except `class`.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the class list in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns an inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Sets an inline style property. An empty value removes it.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.style.remove(property);
        } else {
            self.style.insert(property.to_string(), value);
        }
    }

    /// Returns the parent element, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the child elements in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
