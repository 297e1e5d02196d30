//! Email address extraction

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Returns the first email-shaped token in `content`, or an empty string
///
/// No deliverability checks are made.
pub fn extract_email(content: &str) -> String {
    EMAIL_PATTERN
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
