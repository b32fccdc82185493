//! The element arena.

use std::ops::{Index, IndexMut};

use crate::error::{DomError, Result};
use crate::node::{Element, NodeId};
use crate::selector::Selector;
use crate::window::Window;

/// A page: an arena of elements rooted at `html`, plus window state.
///
/// Nodes are never freed; removing a node detaches it from its parent so
/// outstanding [`NodeId`]s stay valid.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    /// Window state.
    pub window: Window,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty `html` / `head` / `body` document.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            window: Window::default(),
        };
        doc.head = doc.create_child(doc.root, "head");
        doc.body = doc.create_child(doc.root, "body");
        doc
    }

    /// Returns the `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the `head` element.
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Returns the `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the element for `id`, if it belongs to this document.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    /// Returns the element for `id` mutably, if it belongs to this document.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Creates an element and appends it to `parent`.
    pub fn create_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Appends `child` as the last child of `parent`, moving it if attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyCycle {
                parent: parent.0,
                child: child.0,
            });
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Detaches `id` from its parent.
    pub fn remove(&mut self, id: NodeId) {
        if self.get(id).is_some() {
            self.detach(id);
        }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id.0))
        }
    }

    /// Returns the parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Element::parent)
    }

    /// Returns whether `id` is attached under the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root, id)
    }

    /// Returns whether `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Returns the descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(id) {
            Some(el) => el.children().iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children().iter().rev().copied());
        }
        out
    }

    /// Returns whether `id` matches `selector`.
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.get(id).is_some_and(|el| selector.matches(el))
    }

    /// Returns the nearest inclusive ancestor of `id` matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.matches(node, selector) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Returns descendants of `scope` matching `selector`, in document order.
    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    /// Returns every attached element matching `selectors`.
    pub fn query_selector_all(&self, selectors: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selectors)?;
        Ok(self.select_within(self.root, &selector))
    }

    /// Returns the first attached element matching `selectors`.
    pub fn query_selector(&self, selectors: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selectors)?.into_iter().next())
    }

    /// Returns the attached element with the given `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.nodes[node.0].id() == Some(id))
    }

    /// Returns the concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = self.get(id).map(|el| el.text.clone()).unwrap_or_default();
        for node in self.descendants(id) {
            text.push_str(&self.nodes[node.0].text);
        }
        text
    }

    /// Replaces the content of `id` with plain text, detaching its children.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        let children: Vec<NodeId> = match self.get(id) {
            Some(el) => el.children().to_vec(),
            None => return,
        };
        for child in children {
            self.detach(child);
        }
        self.nodes[id.0].text = text.into();
    }

    /// Returns the number of elements ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a document has at least `html`, `head` and `body`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for Document {
    type Output = Element;

    fn index(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Document {
    fn index_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }
}
