use super::StyleTarget;

pub const ORB_SELECTOR: &str = ".hero-orb";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Offset in px of orb `index` for a cursor at (`x`, `y`), both normalized
/// to [0, 1] across the viewport.
pub fn orb_offset(index: usize, x: f64, y: f64, speed_step: f64) -> (f64, f64) {
    let speed = (index + 1) as f64 * speed_step;
    ((x - 0.5) * speed, (y - 0.5) * speed)
}

pub fn translate_css(dx: f64, dy: f64) -> String {
    format!("translate({}px, {}px)", dx, dy)
}

/// Shifts the hero orbs with the cursor.
pub struct Parallax<T> {
    orbs: Vec<T>,
    speed_step: f64,
    enabled: bool,
}

impl<T: StyleTarget> Parallax<T> {
    /// Disabled when there is nothing to move or the visitor asked for
    /// reduced motion.
    pub fn new(orbs: Vec<T>, reduced_motion: bool, speed_step: f64) -> Self {
        let enabled = !orbs.is_empty() && !reduced_motion;
        Self {
            orbs,
            speed_step,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_mouse_move(&self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if !self.enabled || width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x, y) = (client_x / width, client_y / height);
        for (index, orb) in self.orbs.iter().enumerate() {
            let (dx, dy) = orb_offset(index, x, y, self.speed_step);
            orb.set_style("transform", &translate_css(dx, dy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::MockStyleTarget;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    #[test]
    fn test_orb_speed_grows_with_index() {
        assert_eq!(orb_offset(0, 1.0, 0.0, 20.0), (10.0, -10.0));
        assert_eq!(orb_offset(1, 1.0, 0.0, 20.0), (20.0, -20.0));
        assert_eq!(orb_offset(2, 0.5, 0.5, 20.0), (0.0, 0.0));
    }

    #[test]
    fn test_translate_css() {
        assert_eq!(translate_css(10.0, -2.5), "translate(10px, -2.5px)");
    }

    #[test]
    fn test_mouse_move_translates_each_orb() {
        let mut first = MockStyleTarget::new();
        first
            .expect_set_style()
            .with(eq("transform"), eq("translate(5px, 0px)"))
            .times(1)
            .return_const(());
        let mut second = MockStyleTarget::new();
        second
            .expect_set_style()
            .with(eq("transform"), eq("translate(10px, 0px)"))
            .times(1)
            .return_const(());

        let parallax = Parallax::new(vec![first, second], false, 20.0);
        assert!(parallax.is_enabled());
        parallax.on_mouse_move(750.0, 500.0, 1000.0, 1000.0);
    }

    #[test]
    fn test_reduced_motion_never_touches_styles() {
        let mut orb = MockStyleTarget::new();
        orb.expect_set_style().times(0);
        orb.expect_remove_style().times(0);

        let parallax = Parallax::new(vec![orb], true, 20.0);
        assert!(!parallax.is_enabled());
        for (x, y) in [(0.0, 0.0), (300.0, 200.0), (1000.0, 800.0)] {
            parallax.on_mouse_move(x, y, 1000.0, 800.0);
        }
    }

    #[test]
    fn test_no_orbs_is_disabled() {
        let parallax: Parallax<MockStyleTarget> = Parallax::new(Vec::new(), false, 20.0);
        assert!(!parallax.is_enabled());
    }

    proptest! {
        #[test]
        fn prop_offset_bounded_by_half_speed(index in 0usize..8, x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
            let (dx, dy) = orb_offset(index, x, y, 20.0);
            let limit = (index + 1) as f64 * 10.0;
            prop_assert!(dx.abs() <= limit + 1e-9);
            prop_assert!(dy.abs() <= limit + 1e-9);
        }
    }
}
