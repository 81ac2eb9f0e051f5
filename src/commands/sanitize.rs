use anyhow::Result;
use serde::Serialize;

use crate::config::BmiScaleConfig;
use crate::core::FieldKind;
use crate::form::{FormHandlers, FormState, FormSurface};

/// One pass of the change handler over a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizeReport {
    pub field: FieldKind,
    pub before: String,
    pub after: String,
    /// Validity of the text as typed, before sanitizing
    pub valid: bool,
}

impl SanitizeReport {
    pub fn build(handlers: &FormHandlers, kind: FieldKind, text: &str) -> Self {
        let mut state = FormState::default();
        state.set_text(kind, text);
        handlers.handle_input(&state, kind).apply(&mut state);

        Self {
            field: kind,
            before: text.to_string(),
            after: state.text(kind).to_string(),
            valid: !state.feedback(kind).error_visible,
        }
    }
}

/// Print the sanitized text; the exit status is not affected by validity.
pub fn sanitize(config: &BmiScaleConfig, kind: FieldKind, text: &str) -> Result<()> {
    let report = SanitizeReport::build(&FormHandlers::new(config), kind, text);
    tracing::debug!(field = %report.field, valid = report.valid, "sanitized text");
    println!("{}", report.after);
    Ok(())
}
