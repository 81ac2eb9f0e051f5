// Test utility module for bmiscale integration tests
#![allow(dead_code)]

use bmiscale::config::BmiScaleConfig;
use bmiscale::core::FieldKind;
use bmiscale::form::{FormHandlers, FormState, RenderInstruction};

/// A form with default handlers, driven the way a user would drive it.
pub struct FormDriver {
    pub handlers: FormHandlers,
    pub state: FormState,
}

impl FormDriver {
    pub fn new() -> Self {
        Self::with_config(&BmiScaleConfig::default())
    }

    pub fn with_config(config: &BmiScaleConfig) -> Self {
        Self {
            handlers: FormHandlers::new(config),
            state: FormState::default(),
        }
    }

    /// Replace the text of a field and fire its change event.
    pub fn type_into(&mut self, kind: FieldKind, text: &str) -> RenderInstruction {
        self.state.field_mut(kind).raw_text = text.to_string();
        let instruction = self.handlers.handle_input(&self.state, kind);
        instruction.apply(&mut self.state);
        instruction
    }

    /// Fill both fields and submit.
    pub fn submit_pair(&mut self, weight: &str, height: &str) -> RenderInstruction {
        self.type_into(FieldKind::Primary, weight);
        self.type_into(FieldKind::Secondary, height);
        self.submit()
    }

    pub fn submit(&mut self) -> RenderInstruction {
        let instruction = self.handlers.handle_submit(&self.state);
        instruction.apply(&mut self.state);
        instruction
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
