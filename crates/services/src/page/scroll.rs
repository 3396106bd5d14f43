use std::time::Duration;

use crate::debounce::Debouncer;
use crate::timers::Scheduler;

/// Delivered when the scroll burst paused long enough for the header to
/// react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSettle;

/// Hides the fixed header while scrolling down and shows it when scrolling
/// up. Reacts once per debounced burst, comparing the offset at that moment
/// with the one handled last time.
#[derive(Debug, Clone)]
pub struct HeaderAutoHide {
    debouncer: Debouncer,
    last_offset: f64,
    latest_offset: f64,
    hidden: bool,
}

impl HeaderAutoHide {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
            last_offset: 0.0,
            latest_offset: 0.0,
            hidden: false,
        }
    }

    pub fn on_scroll<S>(&mut self, offset: f64, scheduler: &mut S)
    where
        S: Scheduler<HeaderSettle> + ?Sized,
    {
        self.latest_offset = offset;
        self.debouncer.trigger(scheduler, HeaderSettle);
    }

    /// Returns whether the header is hidden after settling.
    pub fn settle(&mut self) -> bool {
        self.debouncer.settle();
        self.hidden = self.latest_offset > self.last_offset;
        self.last_offset = self.latest_offset;
        self.hidden
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Inline transform of the header.
    #[must_use]
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Floating "back to top" button, visible past a scroll threshold.
#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Returns true when visibility changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::TimerQueue;

    #[test]
    fn header_hides_on_down_and_shows_on_up() {
        let mut queue = TimerQueue::new();
        let mut header = HeaderAutoHide::new(Duration::from_millis(100));

        for offset in [10.0, 50.0, 120.0] {
            header.on_scroll(offset, &mut queue);
            queue.advance(Duration::from_millis(20));
        }
        assert!(!header.is_hidden());
        let fired = queue.advance(Duration::from_millis(100));
        assert_eq!(fired.len(), 1);
        assert!(header.settle());
        assert_eq!(header.transform(), "translateY(-100%)");

        header.on_scroll(80.0, &mut queue);
        assert_eq!(queue.advance(Duration::from_millis(100)).len(), 1);
        assert!(!header.settle());
        assert_eq!(header.transform(), "translateY(0)");
    }

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        let mut button = BackToTop::new(300.0);
        assert!(!button.on_scroll(300.0));
        assert!(!button.is_visible());
        assert!(button.on_scroll(301.0));
        assert!(button.is_visible());
        assert!(!button.on_scroll(900.0));
        assert!(button.on_scroll(0.0));
        assert!(!button.is_visible());
    }
}
