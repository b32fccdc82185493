//! Animated counters for `[data-count]` elements.

use std::time::Duration;

use oxide_dom::{Document, Event, Listener, Listeners, NodeId, ObserveOptions};
use tokio::time::Instant;
use tracing::debug;

use crate::behavior::{select_all, Behavior, EventContext};

const NAME: &str = "count_up";

#[derive(Debug, Clone)]
struct Counter {
    node: NodeId,
    target: i64,
    step: f64,
    current: f64,
    next_frame: Instant,
}

/// Counts from zero up to `data-count` once the element is half visible.
///
/// The value grows by `target / (duration / frame)` per frame and shows
/// its integer part; the last frame shows the exact target.
#[derive(Debug)]
pub struct CountUp {
    duration: Duration,
    frame: Duration,
    running: Vec<Counter>,
}

impl CountUp {
    pub fn new(duration: Duration, frame: Duration) -> Self {
        Self {
            duration,
            frame: frame.max(Duration::from_millis(1)),
            running: Vec::new(),
        }
    }

    fn start(&mut self, doc: &Document, node: NodeId, now: Instant) {
        let raw = doc[node].attr("data-count").unwrap_or_default();
        let Ok(target) = raw.trim().parse::<i64>() else {
            debug!(%node, value = raw, "data-count is not a number");
            return;
        };
        let frames = self.duration.as_millis() as f64 / self.frame.as_millis() as f64;
        self.running.push(Counter {
            node,
            target,
            step: target as f64 / frames,
            current: 0.0,
            next_frame: now + self.frame,
        });
    }

    /// Returns the number of counters still animating.
    pub fn running(&self) -> usize {
        self.running.len()
    }
}

impl Behavior for CountUp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, listeners: &mut Listeners) {
        let counters = select_all(doc, "[data-count]");
        if counters.is_empty() {
            return;
        }
        for counter in counters {
            listeners.observe(NAME, counter, "count", ObserveOptions::new(0.5, "0px"));
        }
    }

    fn handle(
        &mut self,
        doc: &mut Document,
        _listener: &Listener,
        event: &Event,
        ctx: &mut EventContext<'_>,
    ) {
        if let Event::Intersection {
            target,
            is_intersecting: true,
        } = event
        {
            ctx.listeners.unobserve(NAME, *target);
            self.start(doc, *target, ctx.now);
        }
    }

    fn tick(&mut self, doc: &mut Document, now: Instant) {
        let frame = self.frame;
        self.running.retain_mut(|counter| {
            while counter.next_frame <= now {
                counter.current += counter.step;
                if counter.current >= counter.target as f64 {
                    doc.set_text_content(counter.node, counter.target.to_string());
                    return false;
                }
                doc.set_text_content(counter.node, (counter.current.floor() as i64).to_string());
                counter.next_frame += frame;
            }
            true
        });
    }
}
