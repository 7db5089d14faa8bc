/// One counter's count-up animation from 0 to `target`.
///
/// Driven by animation-frame timestamps: the first frame fixes the start
/// time, each later frame yields the value to display.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    start: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms: f64::from(duration_ms),
            start: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Count towards a new target from the next frame on. Used when a signup
    /// lands while the count-up is still running.
    pub fn retarget(&mut self, target: u64) {
        self.target = target;
    }

    /// Value at a given progress in [0, 1].
    pub fn value_at(&self, progress: f64) -> u64 {
        if progress >= 1.0 {
            return self.target;
        }
        let eased = super::ease_out_quart(progress);
        ((eased * self.target as f64).floor() as u64).min(self.target)
    }

    /// Advance to the frame at `timestamp` (milliseconds).
    pub fn step(&mut self, timestamp: f64) -> CounterFrame {
        let start = *self.start.get_or_insert(timestamp);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp - start) / self.duration_ms).min(1.0)
        };
        CounterFrame {
            value: self.value_at(progress),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        let anim = CounterAnimation::new(1500, 2000);
        assert_eq!(anim.value_at(0.0), 0);
        assert_eq!(anim.value_at(1.0), 1500);
    }

    #[test]
    fn test_step_timeline() {
        let mut anim = CounterAnimation::new(1500, 2000);
        assert_eq!(anim.step(100.0), CounterFrame { value: 0, done: false });
        // halfway: floor(0.9375 * 1500)
        assert_eq!(anim.step(1100.0), CounterFrame { value: 1406, done: false });
        assert_eq!(anim.step(2100.0), CounterFrame { value: 1500, done: true });
        // frames after the end stay clamped
        assert_eq!(anim.step(5000.0), CounterFrame { value: 1500, done: true });
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut anim = CounterAnimation::new(42, 0);
        assert_eq!(anim.step(16.0), CounterFrame { value: 42, done: true });
    }

    #[test]
    fn test_zero_target() {
        let mut anim = CounterAnimation::new(0, 2000);
        assert_eq!(anim.step(0.0).value, 0);
        assert_eq!(anim.step(2000.0), CounterFrame { value: 0, done: true });
    }

    proptest! {
        #[test]
        fn prop_monotonic_and_bounded(target in 0u64..10_000_000, steps in 2usize..200) {
            let anim = CounterAnimation::new(target, 2000);
            let mut prev = 0;
            for i in 0..=steps {
                let v = anim.value_at(i as f64 / steps as f64);
                prop_assert!(v >= prev);
                prop_assert!(v <= target);
                prev = v;
            }
            prop_assert_eq!(prev, target);
        }
    }
}
