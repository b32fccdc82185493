//! In-page anchor scrolling.

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners, ScrollBehavior};

use crate::behavior::{closest, select_first, Behavior, EventContext};

const NAME: &str = "smooth_scroll";

/// Scrolls smoothly to `#id` anchors, leaving room for the header.
#[derive(Debug)]
pub struct SmoothScroll {
    fallback_header_height: f64,
    gap: f64,
}

impl SmoothScroll {
    pub fn new(fallback_header_height: f64, gap: f64) -> Self {
        Self {
            fallback_header_height,
            gap,
        }
    }

    fn header_height(&self, doc: &Document) -> f64 {
        select_first(doc, "header")
            .map(|header| doc[header].rect.height)
            .unwrap_or(self.fallback_header_height)
    }
}

impl Behavior for SmoothScroll {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, _doc: &mut Document, listeners: &mut Listeners) {
        listeners.listen(NAME, EventKind::Click, ListenTarget::Document, "anchor");
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        _listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let Event::Click { target, .. } = event else {
            return;
        };
        let Some(link) = closest(doc, *target, "a[href^=\"#\"]") else {
            return;
        };
        let href = doc[link].attr("href").unwrap_or_default();
        if href == "#" || href == "#!" {
            return;
        }
        let Some(destination) = doc.get_element_by_id(&href[1..]) else {
            return;
        };

        ctx.prevent_default();
        let top = doc[destination].rect.top - self.header_height(doc) - self.gap;
        doc.window.scroll_to(top, ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{dispatch, node};
    use oxide_dom::{NodeSpec, PageSpec, Rect, ScrollRequest};
    use tokio::time::Instant;

    fn page(with_header: bool) -> Document {
        let mut spec = PageSpec::default();
        if with_header {
            spec = spec.body(NodeSpec::new("header").rect(Rect::new(0.0, 0.0, 1280.0, 90.0)));
        }
        Document::from_spec(
            &spec
                .body(
                    NodeSpec::new("a")
                        .attr("href", "#services")
                        .child(NodeSpec::new("span").text("Services")),
                )
                .body(NodeSpec::new("a").attr("href", "#"))
                .body(NodeSpec::new("a").attr("href", "#missing"))
                .body(
                    NodeSpec::new("section")
                        .id("services")
                        .rect(Rect::new(1500.0, 0.0, 1280.0, 600.0)),
                ),
        )
    }

    fn click(doc: &mut Document, selector: &str) -> bool {
        let mut listeners = Listeners::new();
        let mut scroll = SmoothScroll::new(72.0, 20.0);
        scroll.init(doc, &mut listeners);
        let target = node(doc, selector);
        dispatch(&mut scroll, doc, &mut listeners, &Event::click(target), Instant::now())
    }

    #[test]
    fn test_scrolls_below_header() {
        let mut doc = page(true);
        assert!(click(&mut doc, "span"));
        assert_eq!(
            doc.window.scroll_requests,
            [ScrollRequest {
                top: 1390.0,
                behavior: ScrollBehavior::Smooth
            }]
        );
    }

    #[test]
    fn test_fallback_header_height() {
        let mut doc = page(false);
        assert!(click(&mut doc, "a[href=\"#services\"]"));
        assert_eq!(doc.window.scroll_requests[0].top, 1408.0);
    }

    #[test]
    fn test_ignores_bare_hash_and_missing_target() {
        let mut doc = page(true);
        assert!(!click(&mut doc, "a[href=\"#\"]"));
        assert!(!click(&mut doc, "a[href=\"#missing\"]"));
        assert!(doc.window.scroll_requests.is_empty());
    }
}
