//! The page controller: owns the behaviors, routes events, pumps timers.

use std::sync::Arc;

use oxide_dom::{Document, Event, Listeners};
use oxide_forms::{
    FieldValidator, FormController, PendingSubmission, SimulatedSubmitter, SubmissionOutcome,
    Submitter,
};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::behavior::{Behavior, EventContext};
use crate::config::PageConfig;
use crate::init::InitState;
use crate::modules::{
    ActiveMenu, BurgerMenu, CountUp, Forms, LazyLoad, MicroInteractions, Modal, PortfolioFilter,
    Privacy, ScrollAnimation, ScrollSpy, ScrollToTop, SmoothScroll,
};

/// What happened while dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Some handler suppressed the host's default action.
    pub default_prevented: bool,
    /// Number of listeners that received the event.
    pub handled: usize,
    /// Submissions started by the event.
    pub submissions_started: usize,
}

/// All behaviors of one page.
///
/// ```rust
/// use oxide_behaviors::{Page, PageConfig};
/// use oxide_dom::{Document, NodeSpec, PageSpec};
///
/// let mut doc = Document::from_spec(
///     &PageSpec::default().body(NodeSpec::new("img").attr("src", "team.jpg")),
/// );
/// let mut page = Page::from_config(PageConfig::default());
/// page.init(&mut doc);
/// page.init(&mut doc);
///
/// let img = doc.query_selector("img").unwrap().unwrap();
/// assert_eq!(doc[img].attr("loading"), Some("lazy"));
/// assert!(page.init_state().is_initialized("lazy_load"));
/// ```
pub struct Page {
    behaviors: Vec<Box<dyn Behavior>>,
    state: InitState,
    listeners: Listeners,
    forms: Arc<FormController>,
    submitter: Box<dyn Submitter>,
    pending: Vec<PendingSubmission>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("behaviors", &self.behaviors.len())
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Builds every behavior from `config`, submitting forms through
    /// `submitter`.
    pub fn new(config: PageConfig, submitter: impl Submitter + 'static) -> Self {
        let validator = FieldValidator::new(config.messages.clone());
        let forms = Arc::new(
            FormController::new(validator).confirmation_path(config.confirmation_path.as_str()),
        );

        let behaviors: Vec<Box<dyn Behavior>> = vec![
            Box::new(BurgerMenu::new(config.menu_breakpoint, config.resize_debounce())),
            Box::new(Forms::new(Arc::clone(&forms))),
            Box::new(SmoothScroll::new(config.fallback_header_height, config.scroll_gap)),
            Box::new(ScrollSpy::new()),
            Box::new(ScrollAnimation::new()),
            Box::new(MicroInteractions::new(config.ripple_lifetime())),
            Box::new(CountUp::new(config.count_duration(), config.count_frame())),
            Box::new(PortfolioFilter::new()),
            Box::new(Modal::new()),
            Box::new(ScrollToTop::new(
                config.scroll_top_threshold,
                config.scroll_throttle(),
                config.scroll_top_label.as_str(),
            )),
            Box::new(LazyLoad::new()),
            Box::new(ActiveMenu::new()),
            Box::new(Privacy::new(config.privacy_path.as_str())),
        ];

        Self {
            behaviors,
            state: InitState::new(),
            listeners: Listeners::new(),
            forms,
            submitter: Box::new(submitter),
            pending: Vec::new(),
        }
    }

    /// Builds a page with the simulated submitter.
    pub fn from_config(config: PageConfig) -> Self {
        let submitter = SimulatedSubmitter::new(config.submit_delay());
        Self::new(config, submitter)
    }

    /// Initializes every behavior not yet initialized.
    pub fn init(&mut self, doc: &mut Document) {
        for behavior in &mut self.behaviors {
            if self.state.ensure_once(behavior.name()) {
                behavior.init(doc, &mut self.listeners);
            }
        }
        info!(
            behaviors = self.state.initialized().len(),
            listeners = self.listeners.len(),
            "page initialized"
        );
    }

    /// Delivers `event` to every matching listener in registration order.
    pub fn dispatch(&mut self, doc: &mut Document, event: &Event, now: Instant) -> DispatchOutcome {
        match event {
            Event::Scroll { offset } => doc.window.scroll_y = *offset,
            Event::Resize { width } => doc.window.inner_width = *width,
            _ => {}
        }

        let matching = self.listeners.matching(doc, event);
        let before = self.pending.len();
        let mut ctx = EventContext::new(now, &mut self.listeners, &mut self.pending);
        for listener in &matching {
            if let Some(behavior) = self
                .behaviors
                .iter_mut()
                .find(|b| b.name() == listener.owner)
            {
                behavior.handle(doc, listener, event, &mut ctx);
            }
        }
        let default_prevented = ctx.default_prevented();

        debug!(kind = %event.kind(), handled = matching.len(), default_prevented, "event dispatched");
        DispatchOutcome {
            default_prevented,
            handled: matching.len(),
            submissions_started: self.pending.len() - before,
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        for behavior in &mut self.behaviors {
            behavior.tick(doc, now);
        }
    }

    /// Awaits every queued submission and completes it.
    pub async fn flush_submissions(&mut self, doc: &mut Document) -> Vec<SubmissionOutcome> {
        let mut outcomes = Vec::with_capacity(self.pending.len());
        for pending in std::mem::take(&mut self.pending) {
            let result = self.submitter.submit(&pending.payload).await;
            outcomes.push(self.forms.complete_submission(doc, pending, result));
        }
        outcomes
    }

    /// Returns the number of submissions waiting for
    /// [`flush_submissions`](Self::flush_submissions).
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn init_state(&self) -> &InitState {
        &self.state
    }

    pub fn forms(&self) -> &FormController {
        &self.forms
    }
}
