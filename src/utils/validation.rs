use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

// local@domain.tld, no whitespace and a single '@'
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<&str> {
    if is_valid_email(email) {
        Ok(email)
    } else {
        Err(Error::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last@sub.example.co.uk")]
    #[case("a+tag@b.io")]
    fn accepts_well_formed_addresses(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("user@")]
    #[case("user example.com")]
    #[case("user@.com")]
    #[case("user@example")]
    #[case("user@@example.com")]
    #[case("user@exa mple.com")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }

    #[test]
    fn validate_email_maps_to_error() {
        assert_eq!(validate_email("user@example.com"), Ok("user@example.com"));
        assert_eq!(validate_email("user@"), Err(Error::InvalidEmail));
    }
}
