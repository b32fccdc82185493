//! Redirects placeholder privacy links to the privacy page.

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners};

use crate::behavior::{select_all, Behavior, EventContext};

const NAME: &str = "privacy";

#[derive(Debug)]
pub struct Privacy {
    path: String,
}

impl Privacy {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Behavior for Privacy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        for link in select_all(doc, "a[href*=\"privacy\"]") {
            listeners.listen(NAME, EventKind::Click, ListenTarget::Node(link), "redirect");
        }
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        _event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let ListenTarget::Node(link) = listener.target else {
            return;
        };
        if matches!(doc[link].attr("href"), Some("#privacy" | "#!")) {
            ctx.prevent_default();
            doc.window.navigate(self.path.as_str());
        }
    }
}
