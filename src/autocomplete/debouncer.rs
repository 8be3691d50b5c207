//! Deadline-based debouncer
//!
//! Holds the most recently observed value until no new value has arrived for
//! `delay`. The event loop drives it: `observe` on every change, `poll` after
//! every wakeup, and `time_until_due` to decide how long it may sleep.

use std::time::{Duration, Instant};

/// Delay used when no configuration overrides it
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    /// Value waiting to be released, with the instant it becomes due
    pending: Option<(T, Instant)>,
    /// Last value released by `poll`
    stable: T,
}

impl<T: Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl<T: Default> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            stable: T::default(),
        }
    }
}

impl<T> Debouncer<T> {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for release after the delay, discarding any value
    /// that was still waiting.
    pub fn observe(&mut self, value: T) {
        self.observe_at(value, Instant::now());
    }

    pub fn observe_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value. Nothing is released until the next `observe`.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// How long the caller may sleep before the pending value is due.
    /// Returns `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn stable(&self) -> &T {
        &self.stable
    }
}

impl<T: Clone> Debouncer<T> {
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Release the pending value if its deadline has passed at `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !due {
            return None;
        }

        let (value, _) = self.pending.take()?;
        self.stable = value.clone();
        Some(value)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
