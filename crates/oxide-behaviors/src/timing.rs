//! Deterministic debounce and throttle.
//!
//! Both keep `Instant` deadlines instead of spawning timers; the page pumps
//! them with the current time.

use std::time::Duration;

use tokio::time::Instant;

/// Fires once, `delay` after the last trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restarts the wait; a pending deadline is replaced.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` once when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Lets a call through at most once per `limit`; calls in between are
/// dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    open_at: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            open_at: None,
        }
    }

    /// Returns whether the call at `now` goes through.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        match self.open_at {
            Some(open_at) if now < open_at => false,
            _ => {
                self.open_at = Some(now + self.limit);
                true
            }
        }
    }
}
