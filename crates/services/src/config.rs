use std::time::Duration;

/// Timing and threshold knobs of the page behaviors.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub toast_duration: Duration,
    pub toast_exit_animation: Duration,
    pub validation_debounce: Duration,
    pub scroll_debounce: Duration,
    /// Offset in pixels past which the back-to-top button shows.
    pub back_to_top_threshold: f64,
    pub banner_fade_after: Duration,
    pub navigate_after_fade: Duration,
    pub home_location: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_duration: Duration::from_millis(5000),
            toast_exit_animation: Duration::from_millis(300),
            validation_debounce: Duration::from_millis(300),
            scroll_debounce: Duration::from_millis(100),
            back_to_top_threshold: 300.0,
            banner_fade_after: Duration::from_secs(10),
            navigate_after_fade: Duration::from_secs(1),
            home_location: "/home".to_string(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn with_home_location(mut self, location: impl Into<String>) -> Self {
        self.home_location = location.into();
        self
    }

    #[must_use]
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    #[must_use]
    pub fn with_redirect_delays(mut self, fade_after: Duration, navigate_after: Duration) -> Self {
        self.banner_fade_after = fade_after;
        self.navigate_after_fade = navigate_after;
        self
    }
}
