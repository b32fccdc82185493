//! The trait every page behavior implements.

use oxide_dom::{Document, Event, Listener, Listeners, NodeId, Selector};
use oxide_forms::PendingSubmission;
use tokio::time::Instant;
use tracing::warn;

/// State shared with a handler while one event is dispatched.
#[derive(Debug)]
pub struct EventContext<'a> {
    /// Time of the event.
    pub now: Instant,
    /// Listener registry, for handlers that stop observing.
    pub listeners: &'a mut Listeners,
    /// Submissions started by this event.
    pub submissions: &'a mut Vec<PendingSubmission>,
    default_prevented: bool,
}

impl<'a> EventContext<'a> {
    pub fn new(
        now: Instant,
        listeners: &'a mut Listeners,
        submissions: &'a mut Vec<PendingSubmission>,
    ) -> Self {
        Self {
            now,
            listeners,
            submissions,
            default_prevented: false,
        }
    }

    /// Suppresses the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A self-contained page behavior.
///
/// `init` runs at most once per page, guarded by
/// [`InitState`](crate::InitState). It registers listeners instead of
/// holding callbacks; the page routes matching events back to `handle`
/// with the registration that matched.
pub trait Behavior: Send {
    /// Name used for the init flag and as listener owner.
    fn name(&self) -> &'static str;

    /// Finds the elements this behavior needs and registers listeners.
    /// Missing elements skip the behavior silently.
    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners);

    /// Handles an event delivered to one of this behavior's listeners.
    fn handle(
        &mut self,
        _doc: &mut Document,
        _listener: &Listener,
        _event: &Event,
        _ctx: &mut EventContext<'_>,
    ) {
    }

    /// Fires timers that are due at `now`.
    fn tick(&mut self, _doc: &mut Document, _now: Instant) {}
}

/// Returns all elements matching `selectors`, or none if they do not parse.
pub(crate) fn select_all(doc: &Document, selectors: &str) -> Vec<NodeId> {
    doc.query_selector_all(selectors).unwrap_or_else(|err| {
        warn!(selectors, error = %err, "selector rejected");
        Vec::new()
    })
}

/// Returns the first element matching `selectors`.
pub(crate) fn select_first(doc: &Document, selectors: &str) -> Option<NodeId> {
    select_all(doc, selectors).into_iter().next()
}

/// Returns the closest inclusive ancestor of `node` matching `selectors`.
pub(crate) fn closest(doc: &Document, node: NodeId, selectors: &str) -> Option<NodeId> {
    match Selector::parse(selectors) {
        Ok(selector) => doc.closest(node, &selector),
        Err(err) => {
            warn!(selectors, error = %err, "selector rejected");
            None
        }
    }
}

/// Appends a `style` element to the head unless one with `id` exists.
pub(crate) fn ensure_stylesheet(doc: &mut Document, id: &str, css: &str) {
    if doc.get_element_by_id(id).is_some() {
        return;
    }
    let head = doc.head();
    let style = doc.create_child(head, "style");
    doc[style].set_attr("id", id);
    doc.set_text_content(style, css);
}

/// Sets `active` and `aria-current="page"` on `link`, or removes both.
pub(crate) fn set_current(doc: &mut Document, link: NodeId, current: bool) {
    let el = &mut doc[link];
    if current {
        el.add_class("active");
        el.set_attr("aria-current", "page");
    } else {
        el.remove_class("active");
        el.remove_attr("aria-current");
    }
}
