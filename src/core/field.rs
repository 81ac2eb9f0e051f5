use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two form measurements a field holds.
///
/// The primary field is body mass in kilograms, the secondary field is
/// body height in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Primary,
    Secondary,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Primary, FieldKind::Secondary];

    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Primary => "Weight",
            FieldKind::Secondary => "Height",
        }
    }

    /// Unit the user types the value in
    pub fn unit(self) -> &'static str {
        match self {
            FieldKind::Primary => "kg",
            FieldKind::Secondary => "cm",
        }
    }

    /// Factor applied to a valid parsed value before it is handed to the
    /// evaluator. Heights are converted from centimeters to meters.
    pub fn conversion_divisor(self) -> f64 {
        match self {
            FieldKind::Primary => 1.0,
            FieldKind::Secondary => 100.0,
        }
    }

    /// The other field, used for focus cycling
    pub fn other(self) -> FieldKind {
        match self {
            FieldKind::Primary => FieldKind::Secondary,
            FieldKind::Secondary => FieldKind::Primary,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// Error decoration of a field: the error message element and the red border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFeedback {
    pub error_visible: bool,
    pub border_highlighted: bool,
}

impl FieldFeedback {
    pub const CLEAR: FieldFeedback = FieldFeedback {
        error_visible: false,
        border_highlighted: false,
    };

    pub const ERROR: FieldFeedback = FieldFeedback {
        error_visible: true,
        border_highlighted: true,
    };

    pub fn for_validity(valid: bool) -> Self {
        if valid {
            Self::CLEAR
        } else {
            Self::ERROR
        }
    }
}

/// One text input of the form together with its error decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementField {
    pub raw_text: String,
    pub kind: FieldKind,
    pub feedback: FieldFeedback,
}

impl MeasurementField {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            raw_text: String::new(),
            kind,
            feedback: FieldFeedback::CLEAR,
        }
    }

    pub fn with_text(kind: FieldKind, text: impl Into<String>) -> Self {
        Self {
            raw_text: text.into(),
            kind,
            feedback: FieldFeedback::CLEAR,
        }
    }
}
