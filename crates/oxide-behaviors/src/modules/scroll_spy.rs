//! Highlights the navigation link of the section in view.

use oxide_dom::{Document, Event, Listener, Listeners, NodeId, ObserveOptions};
use tracing::debug;

use crate::behavior::{select_all, set_current, Behavior, EventContext};

const NAME: &str = "scroll_spy";
const ROOT_MARGIN: &str = "-100px 0px -66%";

#[derive(Debug, Default)]
pub struct ScrollSpy {
    links: Vec<NodeId>,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for ScrollSpy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let sections = select_all(doc, "section[id]");
        let links = select_all(doc, ".nav-link[href^=\"#\"]");
        if sections.is_empty() || links.is_empty() {
            debug!("no sections or anchor links, scroll spy disabled");
            return;
        }
        for section in sections {
            listeners.observe(NAME, section, "section", ObserveOptions::new(0.0, ROOT_MARGIN));
        }
        self.links = links;
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        _listener: &Listener,
        event: &Event,
        _ctx: &mut EventContext<'_>,
    ) {
        let Event::Intersection {
            target,
            is_intersecting: true,
        } = event
        else {
            return;
        };
        let anchor = format!("#{}", doc[*target].id().unwrap_or_default());
        for &link in &self.links {
            let current = doc[link].attr("href") == Some(anchor.as_str());
            set_current(doc, link, current);
        }
    }
}
