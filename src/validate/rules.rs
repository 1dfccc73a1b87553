//! Field-level validation rules.
//!
//! Rules are plain predicates; the form types decide which fields they
//! apply to and what message a failure carries. Rules never mutate and
//! never short-circuit each other.

use std::sync::OnceLock;

use regex::Regex;

// Minimal local@domain.tld shape; not an RFC address parser.
const EMAIL_PATTERN: &str = r".+@.+\..+";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Whether a required string field carries any non-whitespace text.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whether a value looks like an email address.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether a numeric field is finite and inside the inclusive bounds.
///
/// A bound that is itself NaN never fails the comparison, mirroring
/// how a dynamic bound derived from another invalid field behaves: the
/// invalid field reports its own error, not this one.
pub fn in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if !value.is_finite() {
        return false;
    }
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// Whether a tag-set field carries at least one tag.
pub fn has_tags(tags: &[String]) -> bool {
    !tags.is_empty()
}
