use serde::{Deserialize, Serialize};

use crate::config::RangeLimits;
use crate::core::{FieldFeedback, FieldKind, MeasurementField};

/// Text of the banner shown after a rejected submission
pub const BANNER_TEXT: &str = "Please enter valid values in both fields.";

/// Error text shown under a rejected field
pub fn field_error_text(kind: FieldKind, range: &RangeLimits) -> String {
    format!(
        "Enter a valid {} ({} - {} {})",
        kind,
        range.min,
        range.max,
        kind.unit()
    )
}

/// Read/write contract of the visual form.
///
/// Handlers only ever read field text through this trait; all writes go
/// through a [`RenderInstruction`](super::RenderInstruction).
pub trait FormSurface {
    fn text(&self, kind: FieldKind) -> &str;
    fn set_text(&mut self, kind: FieldKind, text: &str);
    fn set_error_visible(&mut self, kind: FieldKind, visible: bool);
    fn set_border_highlighted(&mut self, kind: FieldKind, highlighted: bool);

    fn set_category_label(&mut self, label: &str);
    fn set_message_label(&mut self, label: &str);
    fn set_indicator_offset(&mut self, percent: f64);
    fn set_indicator_visible(&mut self, visible: bool);
    fn set_banner_visible(&mut self, visible: bool);
}

/// The result area below the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub category_label: String,
    pub message_label: String,
    /// Indicator offset from the left edge of the scale, in percent
    pub indicator_offset: f64,
    pub indicator_visible: bool,
}

/// In-memory snapshot of the whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub primary: MeasurementField,
    pub secondary: MeasurementField,
    pub banner_visible: bool,
    pub result: ResultView,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            primary: MeasurementField::new(FieldKind::Primary),
            secondary: MeasurementField::new(FieldKind::Secondary),
            banner_visible: false,
            result: ResultView::default(),
        }
    }
}

impl FormState {
    pub fn with_texts(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: MeasurementField::with_text(FieldKind::Primary, primary),
            secondary: MeasurementField::with_text(FieldKind::Secondary, secondary),
            ..Self::default()
        }
    }

    pub fn field(&self, kind: FieldKind) -> &MeasurementField {
        match kind {
            FieldKind::Primary => &self.primary,
            FieldKind::Secondary => &self.secondary,
        }
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut MeasurementField {
        match kind {
            FieldKind::Primary => &mut self.primary,
            FieldKind::Secondary => &mut self.secondary,
        }
    }

    pub fn feedback(&self, kind: FieldKind) -> FieldFeedback {
        self.field(kind).feedback
    }
}

impl FormSurface for FormState {
    fn text(&self, kind: FieldKind) -> &str {
        &self.field(kind).raw_text
    }

    fn set_text(&mut self, kind: FieldKind, text: &str) {
        self.field_mut(kind).raw_text = text.to_string();
    }

    fn set_error_visible(&mut self, kind: FieldKind, visible: bool) {
        self.field_mut(kind).feedback.error_visible = visible;
    }

    fn set_border_highlighted(&mut self, kind: FieldKind, highlighted: bool) {
        self.field_mut(kind).feedback.border_highlighted = highlighted;
    }

    fn set_category_label(&mut self, label: &str) {
        self.result.category_label = label.to_string();
    }

    fn set_message_label(&mut self, label: &str) {
        self.result.message_label = label.to_string();
    }

    fn set_indicator_offset(&mut self, percent: f64) {
        self.result.indicator_offset = percent;
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        self.result.indicator_visible = visible;
    }

    fn set_banner_visible(&mut self, visible: bool) {
        self.banner_visible = visible;
    }
}
