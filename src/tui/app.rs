//! Interactive form state: the surface snapshot plus focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{BmiScaleConfig, RangeLimits};
use crate::core::FieldKind;
use crate::form::{field_error_text, FormHandlers, FormState};

/// What the terminal form shows and which field receives keystrokes.
pub struct App {
    pub form: FormState,
    pub focus: FieldKind,
    handlers: FormHandlers,
    range: RangeLimits,
    should_quit: bool,
}

impl App {
    pub fn new(config: &BmiScaleConfig) -> Self {
        Self {
            form: FormState::default(),
            focus: FieldKind::Primary,
            handlers: FormHandlers::new(config),
            range: config.range.clone(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Error text shown under a rejected field
    pub fn error_text(&self, kind: FieldKind) -> String {
        field_error_text(kind, &self.range)
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Char(c) => {
                self.form.field_mut(self.focus).raw_text.push(c);
                self.field_changed();
            }
            KeyCode::Backspace => {
                if self.form.field_mut(self.focus).raw_text.pop().is_some() {
                    self.field_changed();
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn field_changed(&mut self) {
        let instruction = self.handlers.handle_input(&self.form, self.focus);
        instruction.apply(&mut self.form);
    }

    fn submit(&mut self) {
        let instruction = self.handlers.handle_submit(&self.form);
        instruction.apply(&mut self.form);
    }
}
