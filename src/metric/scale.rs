//! Mapping of a metric value onto the four-band visual scale.
//!
//! Each band takes a quarter of the scale. Inside a band the position is
//! linear in the metric; the open top band is stretched up to a metric of
//! 100, which sits at the right edge.

use super::category::{
    Category, NORMAL_LOWER, NORMAL_UPPER, OBESITY_LOWER, OVERWEIGHT_LOWER, OVERWEIGHT_UPPER,
};

/// Width of one band in percent of the scale
pub const BAND_WIDTH: f64 = 25.0;

/// Metric value drawn at the right edge of the scale
pub const SCALE_CEILING: f64 = 100.0;

/// Indicator offset in percent, always within `[0, 100]`.
pub fn scale_position(metric: f64) -> f64 {
    if metric > SCALE_CEILING {
        return 100.0;
    }

    let category = Category::classify(metric);
    let band_start = category.index() as f64 * BAND_WIDTH;
    let fraction = match category {
        Category::Underweight => metric / NORMAL_LOWER,
        Category::Normal => band_fraction(metric, NORMAL_LOWER, NORMAL_UPPER),
        Category::Overweight => band_fraction(metric, OVERWEIGHT_LOWER, OVERWEIGHT_UPPER),
        Category::Obesity => (metric - OBESITY_LOWER) / (SCALE_CEILING - OBESITY_LOWER),
    };

    (band_start + fraction * BAND_WIDTH).clamp(0.0, 100.0)
}

/// Linear fraction of `metric` between `lower` and `upper`, saturating at the
/// top so values just below the next band stay inside this one.
fn band_fraction(metric: f64, lower: f64, upper: f64) -> f64 {
    ((metric - lower) / (upper - lower)).min(1.0)
}
