//! Mobile navigation toggle.

use std::time::Duration;

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners, NodeId};
use tokio::time::Instant;
use tracing::debug;

use crate::behavior::{select_all, select_first, Behavior, EventContext};
use crate::timing::Debouncer;

const NAME: &str = "burger_menu";

#[derive(Debug, Clone, Copy)]
struct MenuNodes {
    toggler: NodeId,
    collapse: NodeId,
}

/// Opens and closes `.navbar-collapse` from `.navbar-toggler`.
///
/// The menu closes on Escape, on a click outside menu and toggler, on a
/// click on any `.nav-link`, and when a debounced resize reaches the
/// desktop breakpoint.
#[derive(Debug)]
pub struct BurgerMenu {
    breakpoint: f64,
    resize: Debouncer,
    nodes: Option<MenuNodes>,
}

impl BurgerMenu {
    pub fn new(breakpoint: f64, resize_debounce: Duration) -> Self {
        Self {
            breakpoint,
            resize: Debouncer::new(resize_debounce),
            nodes: None,
        }
    }

    fn is_open(&self, doc: &Document) -> bool {
        self.nodes
            .is_some_and(|n| doc[n.collapse].has_class("show"))
    }

    fn open(&self, doc: &mut Document) {
        let Some(nodes) = self.nodes else { return };
        doc[nodes.collapse].add_class("show");
        doc[nodes.toggler].set_attr("aria-expanded", "true");
        let body = doc.body();
        doc[body].set_style("overflow", "hidden");
    }

    fn close(&self, doc: &mut Document) {
        let Some(nodes) = self.nodes else { return };
        doc[nodes.collapse].remove_class("show");
        doc[nodes.toggler].set_attr("aria-expanded", "false");
        let body = doc.body();
        doc[body].set_style("overflow", "");
    }
}

impl Behavior for BurgerMenu {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let toggler = select_first(doc, ".navbar-toggler");
        let collapse = select_first(doc, ".navbar-collapse");
        let (Some(toggler), Some(collapse)) = (toggler, collapse) else {
            debug!("no navbar toggler or collapse, menu disabled");
            return;
        };
        self.nodes = Some(MenuNodes { toggler, collapse });

        listeners.listen(NAME, EventKind::Click, ListenTarget::Node(toggler), "toggle");
        listeners.listen(NAME, EventKind::KeyDown, ListenTarget::Document, "escape");
        listeners.listen(NAME, EventKind::Click, ListenTarget::Document, "outside");
        for link in select_all(doc, ".nav-link") {
            listeners.listen(NAME, EventKind::Click, ListenTarget::Node(link), "nav_link");
        }
        listeners.listen(NAME, EventKind::Resize, ListenTarget::Window, "resize");
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        let Some(nodes) = self.nodes else { return };
        match (listener.handler, event) {
            ("toggle", _) => {
                ctx.prevent_default();
                if self.is_open(doc) {
                    self.close(doc);
                } else {
                    self.open(doc);
                }
            }
            ("escape", Event::KeyDown { key }) if key == "Escape" && self.is_open(doc) => {
                self.close(doc);
            }
            ("outside", Event::Click { target, .. }) => {
                if self.is_open(doc)
                    && !doc.contains(nodes.collapse, *target)
                    && !doc.contains(nodes.toggler, *target)
                {
                    self.close(doc);
                }
            }
            ("nav_link", _) if self.is_open(doc) => self.close(doc),
            ("resize", _) => self.resize.trigger(ctx.now),
            _ => {}
        }
    }

    fn tick(&mut self, doc: &mut Document, now: Instant) {
        if self.resize.fire(now) && doc.window.inner_width >= self.breakpoint && self.is_open(doc)
        {
            debug!(width = doc.window.inner_width, "desktop width, closing menu");
            self.close(doc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::testing::{dispatch, node};
    use oxide_dom::{NodeSpec, PageSpec};

    fn menu_page() -> Document {
        Document::from_spec(
            &PageSpec::default()
                .body(
                    NodeSpec::new("nav")
                        .child(NodeSpec::new("button").class("navbar-toggler"))
                        .child(
                            NodeSpec::new("div").class("navbar-collapse").child(
                                NodeSpec::new("a")
                                    .class("nav-link")
                                    .attr("href", "/services.html"),
                            ),
                        ),
                )
                .body(NodeSpec::new("main").child(NodeSpec::new("p").text("content"))),
        )
    }

    fn setup() -> (BurgerMenu, Document, Listeners) {
        let mut doc = menu_page();
        let mut listeners = Listeners::new();
        let mut menu = BurgerMenu::new(992.0, Duration::from_millis(250));
        menu.init(&mut doc, &mut listeners);
        (menu, doc, listeners)
    }

    fn is_open(doc: &Document) -> bool {
        doc[node(doc, ".navbar-collapse")].has_class("show")
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let (mut menu, mut doc, mut listeners) = setup();
        let now = Instant::now();
        let toggler = node(&doc, ".navbar-toggler");

        assert!(dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), now));
        assert!(is_open(&doc));
        assert_eq!(doc[toggler].attr("aria-expanded"), Some("true"));
        assert_eq!(doc[doc.body()].style("overflow"), Some("hidden"));

        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), now);
        assert!(!is_open(&doc));
        assert_eq!(doc[toggler].attr("aria-expanded"), Some("false"));
        assert_eq!(doc[doc.body()].style("overflow"), None);
    }

    #[test]
    fn test_escape_and_outside_click_close() {
        let (mut menu, mut doc, mut listeners) = setup();
        let now = Instant::now();
        let toggler = node(&doc, ".navbar-toggler");
        let escape = Event::KeyDown {
            key: "Escape".to_string(),
        };

        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), now);
        dispatch(&mut menu, &mut doc, &mut listeners, &escape, now);
        assert!(!is_open(&doc));

        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), now);
        let inside = node(&doc, ".navbar-collapse");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(inside), now);
        assert!(is_open(&doc));

        let outside = node(&doc, "p");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(outside), now);
        assert!(!is_open(&doc));
    }

    #[test]
    fn test_nav_link_click_closes() {
        let (mut menu, mut doc, mut listeners) = setup();
        let now = Instant::now();
        let toggler = node(&doc, ".navbar-toggler");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), now);

        let link = node(&doc, ".nav-link");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(link), now);
        assert!(!is_open(&doc));
    }

    #[test]
    fn test_debounced_resize_closes_at_breakpoint() {
        let (mut menu, mut doc, mut listeners) = setup();
        let start = Instant::now();
        let toggler = node(&doc, ".navbar-toggler");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), start);

        doc.window.inner_width = 1200.0;
        let resize = Event::Resize { width: 1200.0 };
        dispatch(&mut menu, &mut doc, &mut listeners, &resize, start);
        dispatch(
            &mut menu,
            &mut doc,
            &mut listeners,
            &resize,
            start + Duration::from_millis(200),
        );

        menu.tick(&mut doc, start + Duration::from_millis(300));
        assert!(is_open(&doc));
        menu.tick(&mut doc, start + Duration::from_millis(450));
        assert!(!is_open(&doc));
    }

    #[test]
    fn test_narrow_resize_keeps_menu_open() {
        let (mut menu, mut doc, mut listeners) = setup();
        let start = Instant::now();
        let toggler = node(&doc, ".navbar-toggler");
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::click(toggler), start);

        doc.window.inner_width = 600.0;
        dispatch(&mut menu, &mut doc, &mut listeners, &Event::Resize { width: 600.0 }, start);
        menu.tick(&mut doc, start + Duration::from_secs(1));
        assert!(is_open(&doc));
    }

    #[test]
    fn test_missing_elements_register_nothing() {
        let mut doc = Document::new();
        let mut listeners = Listeners::new();
        BurgerMenu::new(992.0, Duration::from_millis(250)).init(&mut doc, &mut listeners);
        assert!(listeners.is_empty());
    }
}
