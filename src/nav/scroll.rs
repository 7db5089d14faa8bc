use std::cell::Cell;

/// Coalesces bursts of scroll events into one update per animation frame.
///
/// Call [`ScrollThrottle::request`] from the scroll listener; schedule a frame
/// only when it returns `true`, and call [`ScrollThrottle::release`] from the
/// frame callback once the update has run.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    ticking: Cell<bool>,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> bool {
        !self.ticking.replace(true)
    }

    pub fn release(&self) {
        self.ticking.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.ticking.get()
    }
}

/// Whether the nav bar should carry the scrolled style at `offset`.
pub fn nav_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Width of the scroll progress bar, in percent of the scrollable height.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_coalesces_until_release() {
        let throttle = ScrollThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());

        throttle.release();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
    }

    #[test]
    fn test_nav_threshold_is_strict() {
        assert!(!nav_scrolled(0.0, 50.0));
        assert!(!nav_scrolled(50.0, 50.0));
        assert!(nav_scrolled(50.5, 50.0));
        assert!(nav_scrolled(800.0, 50.0));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_percent_degenerate_documents() {
        // page shorter than the viewport
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
        // overscroll bounce
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-20.0, 3000.0, 1000.0), 0.0);
    }
}
