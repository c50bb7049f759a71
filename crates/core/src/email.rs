//! Email format rule.

use std::sync::LazyLock;

use regex::Regex;

/// Accepted email shape: `local-part@domain.tld`, with a 2–6 letter top-level segment.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Whether `email` matches [`EMAIL_PATTERN`] as a whole. Empty strings never match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
