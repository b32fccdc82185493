//! Lightweight modal dialogs driven by Bootstrap data attributes.

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners, NodeId};
use tracing::debug;

use crate::behavior::{closest, select_all, select_first, Behavior, EventContext};

const NAME: &str = "modal";

#[derive(Debug, Default)]
pub struct Modal;

impl Modal {
    pub fn new() -> Self {
        Self
    }
}

fn open(doc: &mut Document, modal: NodeId) {
    doc[modal].add_class("show");
    doc[modal].set_style("display", "flex");
    let body = doc.body();
    doc[body].set_style("overflow", "hidden");
}

fn close(doc: &mut Document, modal: NodeId) {
    doc[modal].remove_class("show");
    doc[modal].set_style("display", "none");
    let body = doc.body();
    doc[body].set_style("overflow", "");
}

impl Behavior for Modal {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        for trigger in select_all(doc, "[data-bs-toggle=\"modal\"]") {
            listeners.listen(NAME, EventKind::Click, ListenTarget::Node(trigger), "open");
        }
        for button in select_all(doc, "[data-bs-dismiss=\"modal\"]") {
            listeners.listen(NAME, EventKind::Click, ListenTarget::Node(button), "dismiss");
        }
        listeners.listen(NAME, EventKind::Click, ListenTarget::Document, "backdrop");
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let Event::Click { target, .. } = event else {
            return;
        };
        match (listener.handler, listener.target) {
            ("open", ListenTarget::Node(trigger)) => {
                ctx.prevent_default();
                let selector = doc[trigger].attr("data-bs-target").unwrap_or_default().to_string();
                match select_first(doc, &selector) {
                    Some(modal) => open(doc, modal),
                    None => debug!(%selector, "modal target not found"),
                }
            }
            ("dismiss", ListenTarget::Node(button)) => {
                if let Some(modal) = closest(doc, button, ".modal") {
                    close(doc, modal);
                }
            }
            ("backdrop", _) if doc[*target].has_class("modal") => close(doc, *target),
            _ => {}
        }
    }
}
