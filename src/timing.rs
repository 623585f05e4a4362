//! Debounce and throttle primitives for the event loop.
//!
//! Both are deadline-based over [`Instant`] rather than spawned timers, so
//! the app tick drives them and tests can feed explicit instants.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer: holds the most recent value and fires it once
/// no new call has arrived for the configured wait window.
///
/// Each `call` replaces the pending value and restarts the window, so a
/// burst of calls collapses to a single fire with the last value.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self { wait, pending: None }
    }

    /// Record a call. Any previously pending value is discarded and the
    /// wait window restarts from `now`.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.wait));
    }

    /// Fire the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|(_, due)| now >= *due) {
            return self.pending.take().map(|(v, _)| v);
        }
        None
    }

    /// Drop any pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Leading-edge, fixed-window throttler: the first call passes, then calls
/// are rejected until the limit has elapsed since the last allowed call.
#[derive(Debug)]
pub struct Throttler {
    limit: Duration,
    last_allowed: Option<Instant>,
}

impl Throttler {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_allowed: None,
        }
    }

    /// Whether a call at `now` is allowed. Allowing a call opens a new
    /// rejection window.
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last_allowed {
            Some(last) if now.duration_since(last) < self.limit => false,
            _ => {
                self.last_allowed = Some(now);
                true
            }
        }
    }
}
