//! Color themes and styling for the terminal form.

use ratatui::style::{Color, Modifier, Style};

use crate::metric::Category;

/// Color scheme for the form
pub struct Theme {
    /// Accent for the focused field and title
    pub primary: Color,
    /// Error markers, borders and the banner
    pub error: Color,
    /// Help text and unfocused borders
    pub muted: Color,
    /// Normal text
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    /// Band color on the scale
    pub fn band_color(&self, category: Category) -> Color {
        match category {
            Category::Underweight => Color::Blue,
            Category::Normal => Color::Green,
            Category::Overweight => Color::Yellow,
            Category::Obesity => Color::Red,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of a field, by focus and error state
    pub fn field_border_style(&self, focused: bool, highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(self.error)
        } else if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn banner_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn band_style(&self, category: Category) -> Style {
        Style::default().bg(self.band_color(category))
    }

    pub fn indicator_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
