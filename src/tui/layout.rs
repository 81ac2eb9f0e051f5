//! Vertical layout of the form.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub primary_field: Rect,
    pub primary_error: Rect,
    pub secondary_field: Rect,
    pub secondary_error: Rect,
    pub banner: Rect,
    pub category_label: Rect,
    pub message_label: Rect,
    pub scale: Rect,
    pub help: Rect,
}

/// Smallest terminal height that fits every section plus the margin
pub const MIN_HEIGHT: u16 = 20;

/// Split the terminal area into the form sections
pub fn calculate_layout(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Weight field
            Constraint::Length(1), // Weight error
            Constraint::Length(3), // Height field
            Constraint::Length(1), // Height error
            Constraint::Length(1), // Banner
            Constraint::Length(1), // Category label
            Constraint::Length(2), // Message label
            Constraint::Length(3), // Scale
            Constraint::Min(1),    // Help
        ])
        .split(area);

    FormLayout {
        title: chunks[0],
        primary_field: chunks[1],
        primary_error: chunks[2],
        secondary_field: chunks[3],
        secondary_error: chunks[4],
        banner: chunks[5],
        category_label: chunks[6],
        message_label: chunks[7],
        scale: chunks[8],
        help: chunks[9],
    }
}
