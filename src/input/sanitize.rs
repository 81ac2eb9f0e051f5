//! Keystroke sanitizer.
//!
//! Runs after validation on every change of a field and rewrites the text in
//! three fixed steps:
//!
//! 1. fraction clamp: too many digits after the decimal point are rounded away
//! 2. whitespace strip: every whitespace character is removed
//! 3. integer clamp: the part before the decimal point is cut to its maximum length
//!
//! The sanitizer never fails. Text that is not a number passes through
//! steps 1 and 3 untouched except for truncation.

use super::numeric::{parse_leading_number, to_fixed};
use crate::config::InputLimits;

/// Rewrites raw field text according to the configured digit limits.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSanitizer {
    limits: InputLimits,
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self::new(InputLimits::default())
    }
}

impl InputSanitizer {
    pub fn new(limits: InputLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Apply all three steps in order.
    pub fn sanitize(&self, text: &str) -> String {
        let clamped = clamp_fraction_digits(text, self.limits.max_fraction_digits);
        let stripped = strip_whitespace(&clamped);
        let sanitized = clamp_integer_length(&stripped, self.limits.max_integer_digits);

        if sanitized != text {
            tracing::debug!(before = text, after = %sanitized, "sanitized field text");
        }
        sanitized
    }
}

/// Round the number to `max_digits` fractional digits when the text after the
/// first decimal point is longer than that.
///
/// The number is read from the whitespace-free text; if no finite number can
/// be read the text is returned unchanged.
pub fn clamp_fraction_digits(text: &str, max_digits: usize) -> String {
    let Some((_, fraction)) = text.split_once('.') else {
        return text.to_string();
    };
    if fraction.chars().count() <= max_digits {
        return text.to_string();
    }

    match parse_leading_number(&strip_whitespace(text)) {
        Some(value) if value.is_finite() => to_fixed(value, max_digits),
        _ => text.to_string(),
    }
}

/// Remove every whitespace character, wherever it appears.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Truncate the part before the first decimal point to `max_len` characters.
/// Everything from the decimal point on is kept as is.
pub fn clamp_integer_length(text: &str, max_len: usize) -> String {
    let (integer, rest) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };
    if integer.chars().count() <= max_len {
        return text.to_string();
    }

    let mut clamped: String = integer.chars().take(max_len).collect();
    if let Some(fraction) = rest {
        clamped.push('.');
        clamped.push_str(fraction);
    }
    clamped
}
