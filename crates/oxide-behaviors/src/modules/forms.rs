//! Client-side validation of page forms.

use std::sync::Arc;

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners};
use oxide_forms::feedback::fields_of;
use oxide_forms::FormController;
use tracing::debug;

use crate::behavior::{select_all, Behavior, EventContext};

const NAME: &str = "forms";

/// Wires `.needs-validation` and `.c-form` forms to a [`FormController`].
///
/// A valid submit starts a submission that the page queues until
/// [`Page::flush_submissions`](crate::Page::flush_submissions).
#[derive(Debug)]
pub struct Forms {
    controller: Arc<FormController>,
}

impl Forms {
    pub fn new(controller: Arc<FormController>) -> Self {
        Self { controller }
    }
}

impl Behavior for Forms {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let forms = select_all(doc, ".needs-validation, .c-form");
        if forms.is_empty() {
            debug!("no validated forms on page");
            return;
        }
        for form in forms {
            listeners.listen(NAME, EventKind::Submit, ListenTarget::Node(form), "submit");
            for field in fields_of(doc, form) {
                listeners.listen(NAME, EventKind::Blur, ListenTarget::Node(field), "blur");
                listeners.listen(NAME, EventKind::Input, ListenTarget::Node(field), "input");
            }
        }
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        match (listener.handler, event) {
            ("submit", Event::Submit { form }) => {
                ctx.prevent_default();
                if let Some(pending) = self.controller.handle_submit(doc, *form) {
                    ctx.submissions.push(pending);
                }
            }
            ("blur", Event::Blur { target }) => self.controller.handle_blur(doc, *target),
            ("input", Event::Input { target }) => self.controller.handle_input(doc, *target),
            _ => {}
        }
    }
}
