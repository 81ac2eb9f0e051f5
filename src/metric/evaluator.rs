//! Submission evaluation: both fields are re-validated, then the metric is
//! computed, banded and placed on the scale.

use serde::Serialize;

use super::advice::{advice_message, IdealRange};
use super::category::Category;
use super::scale::scale_position;
use crate::config::RangeLimits;
use crate::core::{FieldKind, InputError, SubmitError};
use crate::input::numeric::{round_to, to_fixed};
use crate::input::{FieldCheck, Validator};

/// Digits the metric is rounded to before it is displayed and banded
pub const METRIC_DIGITS: usize = 2;

/// Everything derived from one valid pair of measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Metric rounded to [`METRIC_DIGITS`]; this is the value that is banded
    pub metric: f64,
    pub category: Category,
    pub ideal_range: IdealRange,
    /// Indicator offset in percent
    pub position: f64,
    pub category_label: String,
    pub message: String,
}

impl Evaluation {
    /// Evaluate a mass in kilograms and a height in meters.
    ///
    /// Both values must be positive; validation guarantees that for form input.
    pub fn compute(weight: f64, height_m: f64) -> Result<Self, InputError> {
        for value in [weight, height_m] {
            if value <= 0.0 || !value.is_finite() {
                return Err(InputError::NonPositive { value });
            }
        }

        let metric = round_to(weight / (height_m * height_m), METRIC_DIGITS);
        let category = Category::classify(metric);
        let ideal_range = IdealRange::for_height(height_m);

        Ok(Self {
            metric,
            category,
            ideal_range,
            position: scale_position(metric),
            category_label: format!(
                "{} (BMI {})",
                category.label(),
                to_fixed(metric, METRIC_DIGITS)
            ),
            message: advice_message(category, weight, &ideal_range),
        })
    }
}

/// Result of one submission: the re-validation of both fields and, if both
/// were usable, the evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub primary: FieldCheck,
    pub secondary: FieldCheck,
    pub outcome: Result<Evaluation, SubmitError>,
}

impl Submission {
    pub fn check(&self, kind: FieldKind) -> &FieldCheck {
        match kind {
            FieldKind::Primary => &self.primary,
            FieldKind::Secondary => &self.secondary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricEvaluator {
    validator: Validator,
}

impl MetricEvaluator {
    pub fn new(range: RangeLimits) -> Self {
        Self {
            validator: Validator::new(range),
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate both texts and evaluate them when both pass.
    pub fn submit(&self, primary_text: &str, secondary_text: &str) -> Submission {
        let primary = self.validator.check(primary_text, FieldKind::Primary);
        let secondary = self.validator.check(secondary_text, FieldKind::Secondary);

        let outcome = match (&primary.outcome, &secondary.outcome) {
            (Ok(weight), Ok(height)) => {
                Evaluation::compute(*weight, *height).map_err(|err| {
                    if *weight <= 0.0 || !weight.is_finite() {
                        SubmitError::Rejected {
                            primary: Some(err),
                            secondary: None,
                        }
                    } else {
                        SubmitError::Rejected {
                            primary: None,
                            secondary: Some(err),
                        }
                    }
                })
            }
            (p, s) => Err(SubmitError::Rejected {
                primary: p.as_ref().err().cloned(),
                secondary: s.as_ref().err().cloned(),
            }),
        };

        match &outcome {
            Ok(evaluation) => tracing::info!(
                metric = evaluation.metric,
                category = %evaluation.category,
                position = evaluation.position,
                "evaluated submission"
            ),
            Err(err) => tracing::debug!("{}", err),
        }

        Submission {
            primary,
            secondary,
            outcome,
        }
    }
}
