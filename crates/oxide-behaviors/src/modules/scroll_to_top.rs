//! Floating button returning to the top of the page.

use std::time::Duration;

use oxide_dom::{
    Document, Event, EventKind, ListenTarget, Listener, Listeners, NodeId, ScrollBehavior,
};

use crate::behavior::{ensure_stylesheet, Behavior, EventContext};
use crate::timing::Throttle;

const NAME: &str = "scroll_to_top";
const BUTTON_CSS: &str = "\
.scroll-to-top { position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
border: none; border-radius: 50%; font-size: 24px; cursor: pointer; opacity: 0; \
visibility: hidden; transition: all 0.3s ease-out; z-index: 999; } \
.scroll-to-top.visible { opacity: 1; visibility: visible; } \
.scroll-to-top:hover { transform: translateY(-5px); }";

#[derive(Debug)]
pub struct ScrollToTop {
    threshold: f64,
    label: String,
    throttle: Throttle,
    button: Option<NodeId>,
}

impl ScrollToTop {
    pub fn new(threshold: f64, throttle: Duration, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
            throttle: Throttle::new(throttle),
            button: None,
        }
    }
}

impl Behavior for ScrollToTop {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let body = doc.body();
        let button = doc.create_child(body, "button");
        doc[button].add_class("scroll-to-top");
        doc[button].set_attr("aria-label", self.label.as_str());
        doc.set_text_content(button, "↑");
        ensure_stylesheet(doc, "scroll-to-top-style", BUTTON_CSS);
        self.button = Some(button);

        listeners.listen(NAME, EventKind::Scroll, ListenTarget::Window, "scroll");
        listeners.listen(NAME, EventKind::Click, ListenTarget::Node(button), "top");
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        _event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let Some(button) = self.button else { return };
        match listener.handler {
            "scroll" if self.throttle.try_fire(ctx.now) => {
                if doc.window.scroll_y > self.threshold {
                    doc[button].add_class("visible");
                } else {
                    doc[button].remove_class("visible");
                }
            }
            "top" => doc.window.scroll_to(0.0, ScrollBehavior::Smooth),
            _ => {}
        }
    }
}
