use serde::Serialize;

use super::surface::FormSurface;
use crate::core::{FieldFeedback, FieldKind};
use crate::metric::{Evaluation, Submission};

/// New decoration, and optionally new text, for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldUpdate {
    pub kind: FieldKind,
    /// `None` leaves the text as typed
    pub text: Option<String>,
    pub feedback: FieldFeedback,
}

/// New content for the result area; applying it also shows the indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultUpdate {
    pub category_label: String,
    pub message_label: String,
    pub indicator_offset: f64,
}

impl From<&Evaluation> for ResultUpdate {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            category_label: evaluation.category_label.clone(),
            message_label: evaluation.message.clone(),
            indicator_offset: evaluation.position,
        }
    }
}

/// Everything a handler wants changed on the surface.
///
/// Parts that are `None` (or absent from `field_updates`) are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderInstruction {
    pub field_updates: Vec<FieldUpdate>,
    pub banner_visible: Option<bool>,
    pub result: Option<ResultUpdate>,
    /// Set for submissions: the host must not navigate or reload
    pub default_prevented: bool,
}

impl RenderInstruction {
    /// Instruction for a submission: field feedback for both fields, the
    /// banner, and the result area when evaluation succeeded.
    pub fn from_submission(submission: &Submission) -> Self {
        let field_updates = FieldKind::ALL
            .iter()
            .map(|&kind| FieldUpdate {
                kind,
                text: None,
                feedback: submission.check(kind).feedback,
            })
            .collect();

        let result = submission.outcome.as_ref().ok().map(ResultUpdate::from);

        Self {
            field_updates,
            banner_visible: Some(result.is_none()),
            result,
            default_prevented: true,
        }
    }

    pub fn field_update(&self, kind: FieldKind) -> Option<&FieldUpdate> {
        self.field_updates.iter().find(|update| update.kind == kind)
    }

    /// Write the instruction to a surface.
    pub fn apply<S: FormSurface + ?Sized>(&self, surface: &mut S) {
        for update in &self.field_updates {
            if let Some(text) = &update.text {
                surface.set_text(update.kind, text);
            }
            surface.set_error_visible(update.kind, update.feedback.error_visible);
            surface.set_border_highlighted(update.kind, update.feedback.border_highlighted);
        }

        if let Some(visible) = self.banner_visible {
            surface.set_banner_visible(visible);
        }

        if let Some(result) = &self.result {
            surface.set_category_label(&result.category_label);
            surface.set_message_label(&result.message_label);
            surface.set_indicator_offset(result.indicator_offset);
            surface.set_indicator_visible(true);
        }
    }
}
