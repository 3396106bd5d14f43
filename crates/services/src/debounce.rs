use std::time::Duration;

use crate::timers::{Scheduler, TimerId};

/// Trailing-edge debounce.
///
/// Each [`trigger`](Debouncer::trigger) cancels the pending event and
/// schedules a fresh one, so only the last trigger of a burst is delivered,
/// `delay` after the burst pauses. The owner calls
/// [`settle`](Debouncer::settle) when the event arrives.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn trigger<E, S>(&mut self, scheduler: &mut S, event: E) -> TimerId
    where
        S: Scheduler<E> + ?Sized,
    {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule(self.delay, event);
        self.pending = Some(id);
        id
    }

    /// Marks the pending event as delivered.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    /// Drops the pending event without delivering it.
    pub fn cancel<E, S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<E> + ?Sized,
    {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }
}
