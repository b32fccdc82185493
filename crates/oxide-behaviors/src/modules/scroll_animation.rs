//! Fade-in of content as it scrolls into view.

use oxide_dom::{Document, Event, Listener, Listeners, ObserveOptions};
use tracing::debug;

use crate::behavior::{select_all, Behavior, EventContext};

const NAME: &str = "scroll_animation";
const ANIMATED: &str = ".card, .btn, img, h1, h2, h3, p";
const STAGGER_SECS: f64 = 0.05;

#[derive(Debug, Default)]
pub struct ScrollAnimation;

impl ScrollAnimation {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for ScrollAnimation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let elements = select_all(doc, ANIMATED);
        debug!(count = elements.len(), "hiding animated elements");
        for (index, node) in elements.into_iter().enumerate() {
            let delay = index as f64 * STAGGER_SECS;
            let el = &mut doc[node];
            el.set_style("opacity", "0");
            el.set_style("transform", "translateY(20px)");
            el.set_style(
                "transition",
                format!("opacity 0.6s ease-out {delay}s, transform 0.6s ease-out {delay}s"),
            );
            listeners.observe(
                NAME,
                node,
                "reveal",
                ObserveOptions::new(0.1, "0px 0px -50px 0px"),
            );
        }
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        _listener: &Listener,
        event: &Event,
        _ctx: &mut EventContext<'_>,
    ) {
        if let Event::Intersection {
            target,
            is_intersecting: true,
        } = event
        {
            let el = &mut doc[*target];
            el.set_style("opacity", "1");
            el.set_style("transform", "translateY(0)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{dispatch, node};
    use oxide_dom::{NodeSpec, PageSpec};
    use tokio::time::Instant;

    fn page() -> Document {
        Document::from_spec(
            &PageSpec::default()
                .body(NodeSpec::new("h1").text("Title"))
                .body(NodeSpec::new("div").class("card").id("first-card"))
                .body(NodeSpec::new("p").id("intro").text("Hello")),
        )
    }

    #[test]
    fn test_elements_start_hidden_with_stagger() {
        let mut doc = page();
        let mut listeners = Listeners::new();
        ScrollAnimation::new().init(&mut doc, &mut listeners);

        assert_eq!(listeners.count_for(NAME), 3);
        let h1 = node(&doc, "h1");
        assert_eq!(doc[h1].style("opacity"), Some("0"));
        assert_eq!(doc[h1].style("transform"), Some("translateY(20px)"));
        assert_eq!(
            doc[h1].style("transition"),
            Some("opacity 0.6s ease-out 0s, transform 0.6s ease-out 0s")
        );
        let intro = node(&doc, "#intro");
        assert_eq!(
            doc[intro].style("transition"),
            Some("opacity 0.6s ease-out 0.1s, transform 0.6s ease-out 0.1s")
        );
    }

    #[test]
    fn test_visible_element_is_revealed() {
        let mut doc = page();
        let mut listeners = Listeners::new();
        let mut animation = ScrollAnimation::new();
        animation.init(&mut doc, &mut listeners);

        let card = node(&doc, "#first-card");
        dispatch(&mut animation, &mut doc, &mut listeners, &Event::visible(card), Instant::now());
        assert_eq!(doc[card].style("opacity"), Some("1"));
        assert_eq!(doc[card].style("transform"), Some("translateY(0)"));
    }
}
