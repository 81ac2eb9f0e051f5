use serde::{Deserialize, Serialize};

/// Digit limits enforced by the keystroke sanitizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum number of digits after the decimal point (default: 1)
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,

    /// Maximum number of characters before the decimal point (default: 4)
    #[serde(default = "default_max_integer_digits")]
    pub max_integer_digits: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
            max_integer_digits: default_max_integer_digits(),
        }
    }
}

/// Inclusive bounds a parsed measurement must fall into, before unit conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    #[serde(default = "default_min")]
    pub min: f64,

    #[serde(default = "default_max")]
    pub max: f64,
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

impl RangeLimits {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub fn default_max_fraction_digits() -> usize {
    1
}
pub fn default_max_integer_digits() -> usize {
    4
}
pub fn default_min() -> f64 {
    0.01
}
pub fn default_max() -> f64 {
    1000.0
}

/// Largest accepted value of `input.max_fraction_digits`
pub const MAX_FRACTION_DIGITS_LIMIT: usize = 6;

/// Complete configuration, as read from `.bmiscale.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BmiScaleConfig {
    #[serde(default)]
    pub input: InputLimits,

    #[serde(default)]
    pub range: RangeLimits,
}

impl BmiScaleConfig {
    /// Check that the limits describe a usable form.
    pub fn validate(&self) -> Result<(), String> {
        let fraction = self.input.max_fraction_digits;
        if !(1..=MAX_FRACTION_DIGITS_LIMIT).contains(&fraction) {
            return Err(format!(
                "input.max_fraction_digits must be between 1 and {}, got {}",
                MAX_FRACTION_DIGITS_LIMIT, fraction
            ));
        }
        if self.input.max_integer_digits == 0 {
            return Err("input.max_integer_digits must be at least 1".to_string());
        }
        let range = &self.range;
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err("range bounds must be finite".to_string());
        }
        if range.min <= 0.0 {
            return Err(format!("range.min must be positive, got {}", range.min));
        }
        if range.min >= range.max {
            return Err(format!(
                "range.min ({}) must be below range.max ({})",
                range.min, range.max
            ));
        }
        Ok(())
    }
}
