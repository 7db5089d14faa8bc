use super::ClassTarget;

pub const INPUT_SELECTOR: &str = ".form-input";
pub const FOCUSED_CLASS: &str = "focused";

pub fn on_focus(container: &impl ClassTarget) {
    container.add_class(FOCUSED_CLASS);
}

/// Filled fields keep the focused look so their label stays lifted.
pub fn on_blur(container: &impl ClassTarget, value: &str) {
    if value.is_empty() {
        container.remove_class(FOCUSED_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::MockClassTarget;
    use mockall::predicate::eq;

    #[test]
    fn test_focus_adds_class() {
        let mut container = MockClassTarget::new();
        container
            .expect_add_class()
            .with(eq("focused"))
            .times(1)
            .return_const(());
        on_focus(&container);
    }

    #[test]
    fn test_blur_empty_removes_class() {
        let mut container = MockClassTarget::new();
        container
            .expect_remove_class()
            .with(eq("focused"))
            .times(1)
            .return_const(());
        on_blur(&container, "");
    }

    #[test]
    fn test_blur_filled_keeps_class() {
        let mut container = MockClassTarget::new();
        container.expect_remove_class().times(0);
        on_blur(&container, "user@exa");
    }
}
