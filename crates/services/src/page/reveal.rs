use std::collections::BTreeSet;

/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Root margin of the observer; pulls the viewport bottom in by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_ANIMATION: &str = "animate__animated animate__fadeInUp";

/// One-shot entrance animations for elements marked for reveal.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    /// Starts observing an element. Already revealed elements stay revealed.
    pub fn observe(&mut self, element: impl Into<String>) -> bool {
        let element = element.into();
        if self.revealed.contains(&element) {
            return false;
        }
        self.observed.insert(element)
    }

    /// Intersection report for an element. Returns true the first time it
    /// becomes visible; it is unobserved from then on.
    pub fn on_intersection(&mut self, element: &str, intersecting: bool) -> bool {
        if !intersecting || !self.observed.remove(element) {
            return false;
        }
        self.revealed.insert(element.to_string());
        true
    }

    #[must_use]
    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    #[must_use]
    pub fn is_observed(&self, element: &str) -> bool {
        self.observed.contains(element)
    }

    /// Classes of an element marked for reveal.
    #[must_use]
    pub fn class_for(&self, element: &str) -> &'static str {
        if self.is_revealed(element) {
            REVEAL_ANIMATION
        } else {
            ""
        }
    }
}
