use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted, matching the `VARCHAR(255)` column
pub const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // RFC 5322 compliant email regex (simplified but robust)
    // Requires at least one dot after @ for TLD
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).expect("email pattern is valid")
});

/// Input validation helpers
pub struct Validator;

impl Validator {
    /// Validates email address format
    ///
    /// # Example
    /// ```
    /// use lighter_users::security::Validator;
    ///
    /// assert!(Validator::validate_email("user@example.com"));
    /// assert!(!Validator::validate_email("invalid-email"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
            return false;
        }

        // Consecutive dots are invalid anywhere in the address
        if email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }
}
