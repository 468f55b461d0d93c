use crate::config::SCROLL_THRESHOLD_PX;

/// Tracks whether the page has been scrolled past a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD_PX)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Records a new offset. Returns `true` when the flag flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(0.0);
        assert!(!tracker.is_scrolled());
        tracker.observe(20.0);
        assert!(!tracker.is_scrolled());
        tracker.observe(21.0);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn flips_immediately_in_both_directions() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.observe(400.0));
        assert!(!tracker.observe(300.0));
        assert!(tracker.observe(20.0));
        assert!(!tracker.is_scrolled());
        assert!(tracker.observe(20.5));
    }

    #[test]
    fn only_last_offset_matters() {
        let mut tracker = ScrollTracker::default();
        for offset in [500.0, 10.0, 900.0, 3.0] {
            tracker.observe(offset);
        }
        assert!(!tracker.is_scrolled());
    }
}
