//! Event handlers of the form.
//!
//! Both handlers are pure: they read the current surface and return the
//! [`RenderInstruction`] to apply. Nothing is written until the caller
//! applies it.

use super::instruction::{FieldUpdate, RenderInstruction};
use super::surface::FormSurface;
use crate::config::BmiScaleConfig;
use crate::core::FieldKind;
use crate::input::InputSanitizer;
use crate::metric::{MetricEvaluator, Submission};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormHandlers {
    sanitizer: InputSanitizer,
    evaluator: MetricEvaluator,
}

impl FormHandlers {
    pub fn new(config: &BmiScaleConfig) -> Self {
        Self {
            sanitizer: InputSanitizer::new(config.input.clone()),
            evaluator: MetricEvaluator::new(config.range.clone()),
        }
    }

    pub fn sanitizer(&self) -> &InputSanitizer {
        &self.sanitizer
    }

    pub fn evaluator(&self) -> &MetricEvaluator {
        &self.evaluator
    }

    /// Change event on one field: validate the current text, then sanitize it.
    ///
    /// Validation looks at the text as typed; a failed validation does not
    /// stop sanitizing. Only the named field is touched.
    pub fn handle_input<S: FormSurface + ?Sized>(
        &self,
        surface: &S,
        kind: FieldKind,
    ) -> RenderInstruction {
        let text = surface.text(kind);
        let check = self.evaluator.validator().check(text, kind);
        let sanitized = self.sanitizer.sanitize(text);
        let changed = sanitized != text;

        RenderInstruction {
            field_updates: vec![FieldUpdate {
                kind,
                text: changed.then_some(sanitized),
                feedback: check.feedback,
            }],
            ..RenderInstruction::default()
        }
    }

    /// Re-validate both fields and evaluate them.
    pub fn evaluate<S: FormSurface + ?Sized>(&self, surface: &S) -> Submission {
        self.evaluator.submit(
            surface.text(FieldKind::Primary),
            surface.text(FieldKind::Secondary),
        )
    }

    /// Submit event: a rejected submission only shows the banner and field
    /// errors; the result area keeps whatever it showed before.
    pub fn handle_submit<S: FormSurface + ?Sized>(&self, surface: &S) -> RenderInstruction {
        RenderInstruction::from_submission(&self.evaluate(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresetLevel;
    use crate::core::FieldFeedback;
    use crate::form::FormState;
    use pretty_assertions::assert_eq;

    fn type_into(state: &mut FormState, handlers: &FormHandlers, kind: FieldKind, text: &str) {
        state.field_mut(kind).raw_text = text.to_string();
        handlers.handle_input(&*state, kind).apply(state);
    }

    #[test]
    fn test_input_validates_before_sanitizing() {
        let handlers = FormHandlers::default();
        let mut state = FormState::default();

        // "0 .5" is invalid as typed, then sanitized to "0.5"
        type_into(&mut state, &handlers, FieldKind::Primary, "0 .5");
        assert_eq!(state.primary.raw_text, "0.5");
        assert_eq!(state.primary.feedback, FieldFeedback::ERROR);

        // The next change event sees the corrected text
        type_into(&mut state, &handlers, FieldKind::Primary, "0.5");
        assert_eq!(state.primary.feedback, FieldFeedback::CLEAR);
    }

    #[test]
    fn test_input_only_touches_one_field() {
        let handlers = FormHandlers::default();
        let state = FormState::with_texts("abc", "17555");

        let instruction = handlers.handle_input(&state, FieldKind::Secondary);
        assert_eq!(instruction.field_updates.len(), 1);
        assert_eq!(
            instruction.field_update(FieldKind::Secondary),
            Some(&FieldUpdate {
                kind: FieldKind::Secondary,
                text: Some("1755".into()),
                feedback: FieldFeedback::ERROR,
            })
        );
        assert!(instruction.field_update(FieldKind::Primary).is_none());
        assert_eq!(instruction.banner_visible, None);
        assert!(!instruction.default_prevented);
    }

    #[test]
    fn test_unchanged_text_is_not_rewritten() {
        let handlers = FormHandlers::default();
        let state = FormState::with_texts("70.5", "");
        let instruction = handlers.handle_input(&state, FieldKind::Primary);
        assert_eq!(instruction.field_updates[0].text, None);
    }

    #[test]
    fn test_preset_changes_fraction_limit() {
        let handlers = FormHandlers::new(&PresetLevel::Loose.to_config());
        let state = FormState::with_texts("70.256", "");
        let instruction = handlers.handle_input(&state, FieldKind::Primary);
        assert_eq!(instruction.field_updates[0].text.as_deref(), Some("70.26"));
    }

    #[test]
    fn test_successful_submit() {
        let handlers = FormHandlers::default();
        let mut state = FormState::with_texts("70", "175");
        state.banner_visible = true;

        let instruction = handlers.handle_submit(&state);
        assert!(instruction.default_prevented);
        instruction.apply(&mut state);

        assert!(!state.banner_visible);
        assert!(state.result.indicator_visible);
        assert_eq!(state.result.category_label, "Normal weight (BMI 22.86)");
        assert!((state.result.indicator_offset - 41.795).abs() < 0.001);
    }

    #[test]
    fn test_rejected_submit_keeps_previous_result() {
        let handlers = FormHandlers::default();
        let mut state = FormState::with_texts("45", "170");
        handlers.handle_submit(&state).apply(&mut state);
        let previous = state.result.clone();
        assert!(previous.indicator_visible);

        for (weight, height) in [("0", "170"), ("abc", "170"), ("45", "1001")] {
            state.primary.raw_text = weight.into();
            state.secondary.raw_text = height.into();

            let instruction = handlers.handle_submit(&state);
            assert!(instruction.default_prevented);
            assert_eq!(instruction.result, None);
            instruction.apply(&mut state);

            assert!(state.banner_visible);
            assert_eq!(state.result, previous);
        }
    }

    #[test]
    fn test_rejected_submit_on_fresh_form_leaves_indicator_hidden() {
        let handlers = FormHandlers::default();
        let mut state = FormState::with_texts("1001", "175");
        handlers.handle_submit(&state).apply(&mut state);

        assert!(state.banner_visible);
        assert!(!state.result.indicator_visible);
        assert_eq!(state.primary.feedback, FieldFeedback::ERROR);
        assert_eq!(state.secondary.feedback, FieldFeedback::CLEAR);
    }
}
