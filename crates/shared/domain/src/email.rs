//! Email address syntax check.

use validator::ValidateEmail;

use crate::constants::{MAX_EMAIL_LENGTH, MIN_EMAIL_LENGTH};

/// Check whether `email` is a syntactically valid address.
///
/// Accepts `local@domain` where the domain contains at least one dot.
/// Whitespace anywhere in the string is rejected.
pub fn is_email_valid(email: &str) -> bool {
    if email.len() < MIN_EMAIL_LENGTH || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // validator accepts single-label domains such as `localhost`
    let has_dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));

    has_dotted_domain && email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_addresses() {
        for email in [
            "a@b.com",
            "test@example.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.org",
        ] {
            assert!(is_email_valid(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_email_valid("example.com"));
        assert!(!is_email_valid("plainaddress"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_email_valid("user@localhost"));
        assert!(!is_email_valid("a@b"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_email_valid("a b@example.com"));
        assert!(!is_email_valid(" a@example.com"));
        assert!(!is_email_valid("a@example.com\n"));
    }

    #[test]
    fn rejects_empty_and_degenerate_input() {
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("@"));
        assert!(!is_email_valid("@example.com"));
        assert!(!is_email_valid("user@"));
        assert!(!is_email_valid("user@.com"));
    }

    #[test]
    fn rejects_overlong_address() {
        let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(!is_email_valid(&email));
    }
}
