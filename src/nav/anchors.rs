/// Extract the element id from an in-page link such as `#features`.
///
/// Returns `None` for a bare `#` or anything that is not a fragment link, in
/// which case the browser's default navigation is left alone.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Absolute scroll position that puts a target just below the fixed nav bar.
///
/// `target_top` is the target's top edge relative to the viewport, as
/// reported by `getBoundingClientRect`.
pub fn scroll_destination(target_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    target_top + page_offset - nav_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#waitlist-footer"), Some("waitlist-footer"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/cookies.html"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_scroll_destination_subtracts_nav() {
        assert_eq!(scroll_destination(400.0, 1200.0, 72.0), 1528.0);
        // target above the viewport
        assert_eq!(scroll_destination(-300.0, 1200.0, 72.0), 828.0);
        assert_eq!(scroll_destination(0.0, 0.0, 0.0), 0.0);
    }
}
