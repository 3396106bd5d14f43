//! Deferred actions.
//!
//! Every delayed behavior of the page (debounce windows, toast dismissal, the
//! post-save redirect) goes through [`Scheduler`]. The UI backs it with
//! spawned tasks; [`TimerQueue`] is a virtual-time implementation that fires
//! events only when told to advance.

use std::time::Duration;

/// Handle of a scheduled event, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Something that can deliver `event` back to its owner after `delay`.
pub trait Scheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId;

    /// Drops a pending event. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug)]
struct Pending<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

/// Virtual-time scheduler.
///
/// Events fire in due order; events due at the same instant fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: Vec::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns the earliest event due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(index, _)| index)?;
        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.due);
        Some(fired.event)
    }

    /// Advances the clock by `by`, handing every event that comes due to
    /// `handle`. Events scheduled from inside `handle` are relative to the
    /// firing event's due time and fire in the same call when they fall
    /// inside the window.
    pub fn run_for<F>(&mut self, by: Duration, mut handle: F)
    where
        F: FnMut(&mut Self, E),
    {
        let until = self.now + by;
        while let Some(event) = self.pop_due(until) {
            handle(self, event);
        }
        self.now = until;
    }

    /// Advances the clock and collects the fired events without handling
    /// them.
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let mut fired = Vec::new();
        self.run_for(by, |_, event| fired.push(event));
        fired
    }
}

impl<E> Scheduler<E> for TimerQueue<E> {
    fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            event,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}
