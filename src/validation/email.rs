use std::sync::OnceLock;

use regex::Regex;

/// Local part, `@`, domain, a dot, then a final label. No part may be empty
/// or contain whitespace or `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"))
}

/// Returns `true` if `email` has the shape `local@domain.tld`.
///
/// This is a format check only. Deliverability and domain validity are not
/// considered, and any string is accepted as input.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        for email in [
            "john@example.com",
            "a@b.c",
            "first.last+tag@mail.example.org",
            "user@sub.domain.co.uk",
        ] {
            assert!(validate_email(email), "expected {email:?} to be valid");
        }
    }

    #[test]
    fn test_rejects_missing_parts() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "john@",
            "john@example",
            "john@.com",
            "john@example.",
        ] {
            assert!(!validate_email(email), "expected {email:?} to be invalid");
        }
    }

    #[test]
    fn test_rejects_whitespace() {
        for email in [
            "john doe@example.com",
            "john@exa mple.com",
            "john@example.c om",
            " john@example.com",
            "john@example.com\n",
        ] {
            assert!(!validate_email(email), "expected {email:?} to be invalid");
        }
    }

    #[test]
    fn test_rejects_second_at_sign() {
        assert!(!validate_email("john@doe@example.com"));
    }
}
