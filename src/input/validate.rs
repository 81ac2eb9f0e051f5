//! Field validation.
//!
//! A field is valid when its trimmed, comma-normalized text starts with a
//! decimal literal and the value lies inside the configured range. Valid
//! heights are handed on in meters, so the evaluator never sees centimeters.
//!
//! Only the single-digit form must span the whole text. A literal with a
//! nonzero leading digit may be followed by anything (`"70."`, `"70kg"`) and
//! the value is its leading number.

use once_cell::sync::Lazy;
use regex::Regex;

use super::numeric::parse_leading_number;
use crate::config::RangeLimits;
use crate::core::{FieldFeedback, FieldKind, InputError};

/// `0`, `0.0`, `0.00`, ...
static ZERO_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0(?:\.0+)?$").expect("zero pattern is valid"));

/// Either a prefix without leading zeros, or a whole single-digit number,
/// each with an optional fraction.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[1-9][0-9]*(?:\.[0-9]+)?|[0-9](?:\.[0-9]+)?$)")
        .expect("decimal pattern is valid")
});

/// Outcome of checking one field: the value handed to the evaluator and the
/// decoration the field should show.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck {
    pub kind: FieldKind,
    pub outcome: Result<f64, InputError>,
    pub feedback: FieldFeedback,
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }
}

/// Trim surrounding whitespace and turn decimal commas into periods.
pub fn normalize(text: &str) -> String {
    text.trim().replace(',', ".")
}

/// Whether normalized text is an accepted numeric literal.
pub fn matches_grammar(normalized: &str) -> bool {
    !ZERO_LITERAL.is_match(normalized) && DECIMAL_LITERAL.is_match(normalized)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    range: RangeLimits,
}

impl Validator {
    pub fn new(range: RangeLimits) -> Self {
        Self { range }
    }

    /// Parse and range-check `text`, converting heights to meters.
    pub fn validate(&self, text: &str, kind: FieldKind) -> Result<f64, InputError> {
        let normalized = normalize(text);
        if !matches_grammar(&normalized) {
            return Err(InputError::Syntax {
                text: text.to_string(),
            });
        }
        let value = parse_leading_number(&normalized).ok_or_else(|| InputError::Syntax {
            text: text.to_string(),
        })?;
        if !self.range.contains(value) {
            return Err(InputError::Range {
                value,
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(value / kind.conversion_divisor())
    }

    /// Validate and derive the field decoration.
    pub fn check(&self, text: &str, kind: FieldKind) -> FieldCheck {
        let outcome = self.validate(text, kind);
        if let Err(err) = &outcome {
            tracing::debug!(field = %kind, reason = err.kind(), "field rejected: {}", err);
        }
        let feedback = FieldFeedback::for_validity(outcome.is_ok());
        FieldCheck {
            kind,
            outcome,
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn validate(text: &str, kind: FieldKind) -> Result<f64, InputError> {
        Validator::default().validate(text, kind)
    }

    #[test]
    fn test_grammar_accepts_plain_numbers() {
        for text in ["1", "70", "175", "0.5", "70.25", "9", "1000", "0.01"] {
            assert!(matches_grammar(text), "{text} should match");
        }
    }

    #[test]
    fn test_grammar_accepts_trailing_text_after_nonzero_lead() {
        for text in ["1.", "5kg", "70.", "175.", "12kg", "1.2.3", "70.5.1", "7 0"] {
            assert!(matches_grammar(text), "{text} should match");
        }
    }

    #[test]
    fn test_grammar_rejects_zero_forms_and_garbage() {
        for text in [
            "", "0", "0.0", "0.000", "007", "00.5", "abc", ".5", "-5", "+5", "0.", "0kg",
            "0.5kg", "0 5",
        ] {
            assert!(!matches_grammar(text), "{text} should not match");
        }
    }

    #[test]
    fn test_normalize_trims_and_converts_commas() {
        assert_eq!(normalize("  70,5 "), "70.5");
        assert_eq!(normalize("1,2,3"), "1.2.3");
    }

    #[test]
    fn test_primary_value_unchanged() {
        assert_eq!(validate("70", FieldKind::Primary), Ok(70.0));
        assert_eq!(validate(" 70,5 ", FieldKind::Primary), Ok(70.5));
    }

    #[test]
    fn test_value_is_leading_number() {
        assert_eq!(validate("70.", FieldKind::Primary), Ok(70.0));
        assert_eq!(validate("70kg", FieldKind::Primary), Ok(70.0));
        assert_eq!(validate("70.5.1", FieldKind::Primary), Ok(70.5));
        assert_eq!(validate("175.", FieldKind::Secondary), Ok(1.75));
        assert!(matches!(
            validate("1001.", FieldKind::Primary),
            Err(InputError::Range { .. })
        ));
    }

    #[test]
    fn test_secondary_value_converted_to_meters() {
        assert_eq!(validate("175", FieldKind::Secondary), Ok(1.75));
        assert_eq!(validate("170", FieldKind::Secondary), Ok(1.7));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert_eq!(validate("0.01", FieldKind::Primary), Ok(0.01));
        assert_eq!(validate("1000", FieldKind::Primary), Ok(1000.0));
        assert!(matches!(
            validate("0.009", FieldKind::Primary),
            Err(InputError::Range { .. })
        ));
        assert!(matches!(
            validate("1001", FieldKind::Secondary),
            Err(InputError::Range { .. })
        ));
    }

    #[test]
    fn test_syntax_errors() {
        for text in ["0", "abc", "", "   ", "007"] {
            assert!(matches!(
                validate(text, FieldKind::Primary),
                Err(InputError::Syntax { .. })
            ));
        }
    }

    #[test]
    fn test_check_sets_feedback() {
        let validator = Validator::default();

        let ok = validator.check("70", FieldKind::Primary);
        assert!(ok.is_valid());
        assert_eq!(ok.value(), Some(70.0));
        assert_eq!(ok.feedback, FieldFeedback::CLEAR);

        let bad = validator.check("abc", FieldKind::Secondary);
        assert!(!bad.is_valid());
        assert_eq!(bad.value(), None);
        assert_eq!(bad.feedback, FieldFeedback::ERROR);
    }

    #[test]
    fn test_custom_range() {
        let validator = Validator::new(RangeLimits {
            min: 30.0,
            max: 250.0,
        });
        assert!(validator.validate("20", FieldKind::Primary).is_err());
        assert_eq!(validator.validate("250", FieldKind::Secondary), Ok(2.5));
    }

    proptest! {
        #[test]
        fn prop_valid_integers_round_trip(value in 1u32..=1000) {
            let text = value.to_string();
            prop_assert_eq!(validate(&text, FieldKind::Primary), Ok(value as f64));
            prop_assert_eq!(
                validate(&text, FieldKind::Secondary),
                Ok(value as f64 / 100.0)
            );
        }

        #[test]
        fn prop_valid_decimals_round_trip(integer in 1u32..999, fraction in 0u32..100) {
            let text = format!("{integer}.{fraction:02}");
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(validate(&text, FieldKind::Primary), Ok(expected));
        }

        #[test]
        fn prop_out_of_range_is_rejected(value in 1001u32..100_000) {
            prop_assert!(validate(&value.to_string(), FieldKind::Primary).is_err());
        }

        #[test]
        fn prop_leading_letters_are_rejected(text in "[a-z]+[0-9a-z]{0,3}") {
            prop_assert!(validate(&text, FieldKind::Primary).is_err());
        }
    }
}
