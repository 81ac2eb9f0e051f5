use serde::{Deserialize, Serialize};

use super::category::{Category, NORMAL_LOWER, NORMAL_UPPER};
use crate::input::numeric::to_fixed;

/// Body mass range, in kilograms, whose metric would be classified normal
/// for a given height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    pub lower: f64,
    pub upper: f64,
}

impl IdealRange {
    /// Ideal range for a height in meters
    pub fn for_height(height_m: f64) -> Self {
        let squared = height_m * height_m;
        Self {
            lower: NORMAL_LOWER * squared,
            upper: NORMAL_UPPER * squared,
        }
    }

    /// Kilograms to change to reach the nearest bound of the range.
    pub fn distance(&self, category: Category, weight: f64) -> Option<f64> {
        match category {
            Category::Underweight => Some((self.lower - weight).abs()),
            Category::Normal => None,
            Category::Overweight | Category::Obesity => Some((weight - self.upper).abs()),
        }
    }

    fn describe(&self) -> String {
        format!("{} - {} kg", to_fixed(self.lower, 1), to_fixed(self.upper, 1))
    }
}

/// Sentence shown under the result label.
pub fn advice_message(category: Category, weight: f64, range: &IdealRange) -> String {
    let amount = range.distance(category, weight).map(|kg| to_fixed(kg, 1));
    match (category, amount) {
        (Category::Underweight, Some(amount)) => format!(
            "You need to gain {} kg to reach normal weight ({}).",
            amount,
            range.describe()
        ),
        (Category::Overweight | Category::Obesity, Some(amount)) => format!(
            "You need to lose {} kg to reach normal weight ({}).",
            amount,
            range.describe()
        ),
        _ => format!(
            "Nice work! You're doing great! Your weight's in the healthy range ({}).",
            range.describe()
        ),
    }
}
