//! Category filter for portfolio grids.

use oxide_dom::{Document, Event, EventKind, ListenTarget, Listener, Listeners, NodeId};
use tracing::debug;

use crate::behavior::{ensure_stylesheet, select_all, Behavior, EventContext};

const NAME: &str = "portfolio_filter";
const FADE_IN_CSS: &str = "@keyframes fadeIn { from { opacity: 0; transform: scale(0.9); } \
                           to { opacity: 1; transform: scale(1); } }";

#[derive(Debug, Default)]
pub struct PortfolioFilter {
    filters: Vec<NodeId>,
    items: Vec<NodeId>,
}

impl PortfolioFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(&self, doc: &mut Document, chosen: NodeId) {
        let category = doc[chosen].attr("data-filter").unwrap_or_default().to_string();
        for &filter in &self.filters {
            doc[filter].remove_class("active");
        }
        doc[chosen].add_class("active");

        for &item in &self.items {
            let el = &mut doc[item];
            if category == "all" || el.attr("data-category") == Some(category.as_str()) {
                el.set_style("display", "block");
                el.set_style("animation", "fadeIn 0.5s ease-out");
            } else {
                el.set_style("display", "none");
            }
        }
        debug!(%category, "portfolio filtered");
    }
}

impl Behavior for PortfolioFilter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let filters = select_all(doc, ".portfolio-filter");
        let items = select_all(doc, ".portfolio-item");
        if filters.is_empty() || items.is_empty() {
            return;
        }
        for &filter in &filters {
            listeners.listen(NAME, EventKind::Click, ListenTarget::Node(filter), "filter");
        }
        self.filters = filters;
        self.items = items;
        ensure_stylesheet(doc, "portfolio-fade-in", FADE_IN_CSS);
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        listener: &Listener,
        _event: &Event,
        _ctx: &mut EventContext<'_>,
    ) {
        if let ListenTarget::Node(filter) = listener.target {
            self.apply(doc, filter);
        }
    }
}
