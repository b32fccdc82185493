//! Button hover transitions and click ripples.

use std::time::Duration;

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners, NodeId};
use tokio::time::Instant;
use tracing::debug;

use crate::behavior::{ensure_stylesheet, select_all, Behavior, EventContext};

const NAME: &str = "micro_interactions";
const RIPPLE_CSS: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

#[derive(Debug)]
pub struct MicroInteractions {
    ripple_lifetime: Duration,
    ripples: Vec<(NodeId, Instant)>,
}

impl MicroInteractions {
    pub fn new(ripple_lifetime: Duration) -> Self {
        Self {
            ripple_lifetime,
            ripples: Vec::new(),
        }
    }

    fn ripple(&mut self, doc: &mut Document, button: NodeId, x: f64, y: f64, now: Instant) {
        let rect = doc[button].rect;
        let size = rect.width.max(rect.height);

        let ripple = doc.create_child(button, "span");
        let el = &mut doc[ripple];
        el.add_class("ripple");
        el.set_style("width", format!("{size}px"));
        el.set_style("height", format!("{size}px"));
        el.set_style("left", format!("{}px", x - rect.left - size / 2.0));
        el.set_style("top", format!("{}px", y - rect.top - size / 2.0));
        el.set_style("position", "absolute");
        el.set_style("border-radius", "50%");
        el.set_style("background", "rgba(255, 255, 255, 0.5)");
        el.set_style("pointer-events", "none");
        el.set_style("transform", "scale(0)");
        el.set_style("animation", "ripple 0.6s ease-out");

        let host = &mut doc[button];
        host.set_style("position", "relative");
        host.set_style("overflow", "hidden");

        self.ripples.push((ripple, now + self.ripple_lifetime));
    }

    /// Returns the number of ripples still attached.
    pub fn active_ripples(&self) -> usize {
        self.ripples.len()
    }
}

impl Behavior for MicroInteractions {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let buttons = select_all(doc, ".btn, .c-button, button");
        debug!(count = buttons.len(), "attaching button interactions");
        for button in buttons {
            let target = ListenTarget::Node(button);
            listeners.listen(NAME, EventKind::MouseEnter, target, "hover");
            listeners.listen(NAME, EventKind::Click, target, "ripple");
        }
        ensure_stylesheet(doc, "ripple-keyframes", RIPPLE_CSS);
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let ListenTarget::Node(button) = listener.target else {
            return;
        };
        match (listener.handler, event) {
            ("hover", _) => {
                doc[button].set_style("transition", "transform 0.2s ease-out, box-shadow 0.2s ease-out");
            }
            ("ripple", Event::Click { x, y, .. }) => self.ripple(doc, button, *x, *y, ctx.now),
            _ => {}
        }
    }

    fn tick(&mut self, doc: &mut Document, now: Instant) {
        self.ripples.retain(|&(ripple, expires)| {
            if expires <= now {
                doc.remove(ripple);
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{dispatch, node};
    use oxide_dom::{NodeSpec, PageSpec, Rect};

    fn setup() -> (MicroInteractions, Document, Listeners) {
        let mut doc = Document::from_spec(
            &PageSpec::default().body(
                NodeSpec::new("a")
                    .class("btn")
                    .rect(Rect::new(100.0, 50.0, 120.0, 40.0))
                    .text("Contact"),
            ),
        );
        let mut listeners = Listeners::new();
        let mut micro = MicroInteractions::new(Duration::from_millis(600));
        micro.init(&mut doc, &mut listeners);
        (micro, doc, listeners)
    }

    #[test]
    fn test_hover_sets_transition() {
        let (mut micro, mut doc, mut listeners) = setup();
        let btn = node(&doc, ".btn");
        let event = Event::MouseEnter { target: btn };
        dispatch(&mut micro, &mut doc, &mut listeners, &event, Instant::now());
        assert_eq!(
            doc[btn].style("transition"),
            Some("transform 0.2s ease-out, box-shadow 0.2s ease-out")
        );
    }

    #[test]
    fn test_click_ripple_is_centered_and_removed() {
        let (mut micro, mut doc, mut listeners) = setup();
        let btn = node(&doc, ".btn");
        let start = Instant::now();
        let click = Event::Click {
            target: btn,
            x: 110.0,
            y: 120.0,
        };
        dispatch(&mut micro, &mut doc, &mut listeners, &click, start);

        let ripple = node(&doc, ".ripple");
        assert_eq!(doc.parent(ripple), Some(btn));
        assert_eq!(doc[ripple].style("width"), Some("120px"));
        assert_eq!(doc[ripple].style("left"), Some("0px"));
        assert_eq!(doc[ripple].style("top"), Some("-40px"));
        assert_eq!(doc[btn].style("overflow"), Some("hidden"));

        micro.tick(&mut doc, start + Duration::from_millis(599));
        assert_eq!(micro.active_ripples(), 1);
        micro.tick(&mut doc, start + Duration::from_millis(600));
        assert_eq!(micro.active_ripples(), 0);
        assert!(doc.query_selector(".ripple").unwrap().is_none());
    }

    #[test]
    fn test_keyframes_added_once() {
        let (mut micro, mut doc, mut listeners) = setup();
        micro.init(&mut doc, &mut listeners);
        assert_eq!(doc.query_selector_all("style").unwrap().len(), 1);
    }
}
