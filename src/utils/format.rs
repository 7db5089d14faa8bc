/// Parse a counter's `data-target` attribute. Accepts comma-grouped values
/// such as `12,480` as well as plain digits.
pub fn parse_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1500"), Some(1500));
        assert_eq!(parse_count(" 12,480 "), Some(12480));
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count(""), None);
    }
}
