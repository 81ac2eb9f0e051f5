//! Input presets.
//!
//! Two digit-limit policies exist for the keystroke sanitizer:
//! - **Strict**: one fractional digit (the default)
//! - **Loose**: two fractional digits
//!
//! A preset replaces the `[input]` table of whatever configuration was
//! loaded, so the chosen limit is applied uniformly to both fields.
//!
//! # Example
//!
//! ```rust
//! use bmiscale::config::presets::PresetLevel;
//!
//! let config = PresetLevel::Loose.to_config();
//! assert_eq!(config.input.max_fraction_digits, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::core::{BmiScaleConfig, InputLimits};

/// Preset input policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetLevel {
    /// One digit after the decimal point
    Strict,
    /// Two digits after the decimal point
    Loose,
}

impl PresetLevel {
    /// Convert preset level to full configuration.
    pub fn to_config(self) -> BmiScaleConfig {
        BmiScaleConfig {
            input: self.input_limits(),
            ..BmiScaleConfig::default()
        }
    }

    /// Get the sanitizer limits for this preset.
    pub fn input_limits(self) -> InputLimits {
        match self {
            PresetLevel::Strict => InputLimits::default(),
            PresetLevel::Loose => InputLimits {
                max_fraction_digits: 2,
                ..InputLimits::default()
            },
        }
    }

    /// Overwrite the input limits of an existing configuration.
    pub fn apply_to(self, config: &mut BmiScaleConfig) {
        config.input = self.input_limits();
    }
}
