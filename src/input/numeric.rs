//! Lenient number reading and fixed-digit formatting for form text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest numeric prefix, after optional leading whitespace
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))").expect("leading number pattern is valid")
});

/// Read the longest leading decimal number of `text`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12.5kg"` reads as `12.5`. Returns `None` when the text does not start
/// with a number.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let captures = LEADING_NUMBER.captures(text)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

/// Round half away from zero to `digits` fractional digits.
pub fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Format `value` with exactly `digits` fractional digits, rounding halves
/// away from zero (`1.25` becomes `"1.3"` at one digit).
pub fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, round_to(value, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_number_prefixes() {
        assert_eq!(parse_leading_number("70"), Some(70.0));
        assert_eq!(parse_leading_number("  1.25"), Some(1.25));
        assert_eq!(parse_leading_number("12.5kg"), Some(12.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("7."), Some(7.0));
        assert_eq!(parse_leading_number("-3.2"), Some(-3.2));
        assert_eq!(parse_leading_number("1 2.55"), Some(1.0));
    }

    #[test]
    fn test_parse_leading_number_rejects_non_numbers() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(". 5"), None);
        assert_eq!(parse_leading_number("+"), None);
    }

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(1.25, 1), "1.3");
        assert_eq!(to_fixed(1.24, 1), "1.2");
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(70.0, 2), "70.00");
        assert_eq!(to_fixed(22.857142, 2), "22.86");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(15.570934, 2), 15.57);
        assert_eq!(round_to(8.46, 1), 8.5);
    }
}
