use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest metric counted as normal
pub const NORMAL_LOWER: f64 = 18.5;
/// Highest metric shown as normal on the scale
pub const NORMAL_UPPER: f64 = 24.99;
/// Lowest metric counted as overweight
pub const OVERWEIGHT_LOWER: f64 = 25.0;
/// Highest metric shown as overweight on the scale
pub const OVERWEIGHT_UPPER: f64 = 29.99;
/// Lowest metric counted as obesity
pub const OBESITY_LOWER: f64 = 30.0;

/// The four bands of the scale, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obesity,
    ];

    /// Band for a metric value.
    ///
    /// Values between 24.99 and 25 count as normal and values between 29.99
    /// and 30 as overweight, so every finite value has a band.
    pub fn classify(metric: f64) -> Self {
        if metric < NORMAL_LOWER {
            Category::Underweight
        } else if metric < OVERWEIGHT_LOWER {
            Category::Normal
        } else if metric < OBESITY_LOWER {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    /// Text used in the result label
    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    /// Position of the band on the scale, 0 for the leftmost
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
