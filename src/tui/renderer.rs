//! Core rendering logic for the terminal form.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::layout::{calculate_layout, FormLayout, MIN_HEIGHT};
use super::theme::Theme;
use crate::core::FieldKind;
use crate::form::BANNER_TEXT;
use crate::metric::{Category, BAND_WIDTH};

const HELP_TEXT: &str = "Enter: calculate   Tab: switch field   Esc: quit";
const TOO_SMALL_TEXT: &str = "Terminal too small, enlarge the window";

/// Render the full form
pub fn render_ui(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();
    let area = frame.area();
    if area.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new(TOO_SMALL_TEXT)
                .style(theme.error_style())
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }
    let layout = calculate_layout(area);

    render_title(frame, &theme, layout.title);
    render_field(frame, app, &theme, FieldKind::Primary, &layout);
    render_field(frame, app, &theme, FieldKind::Secondary, &layout);
    render_banner(frame, app, &theme, layout.banner);
    render_result(frame, app, &theme, &layout);
    render_scale(frame, app, &theme, layout.scale);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(theme.help_style()),
        layout.help,
    );
}

fn render_title(frame: &mut Frame, theme: &Theme, area: Rect) {
    frame.render_widget(
        Paragraph::new("Body Mass Index").style(theme.title_style()),
        area,
    );
}

fn render_field(frame: &mut Frame, app: &App, theme: &Theme, kind: FieldKind, layout: &FormLayout) {
    let (field_area, error_area) = match kind {
        FieldKind::Primary => (layout.primary_field, layout.primary_error),
        FieldKind::Secondary => (layout.secondary_field, layout.secondary_error),
    };
    let field = app.form.field(kind);
    let focused = app.focus == kind;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", kind.label(), kind.unit()))
        .border_style(theme.field_border_style(focused, field.feedback.border_highlighted));

    let mut spans = vec![Span::styled(field.raw_text.clone(), theme.text_style())];
    if focused {
        spans.push(Span::styled("▏", theme.title_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), field_area);

    if field.feedback.error_visible {
        frame.render_widget(
            Paragraph::new(app.error_text(kind)).style(theme.error_style()),
            error_area,
        );
    }
}

fn render_banner(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    if app.form.banner_visible {
        frame.render_widget(
            Paragraph::new(BANNER_TEXT).style(theme.banner_style()),
            area,
        );
    }
}

fn render_result(frame: &mut Frame, app: &App, theme: &Theme, layout: &FormLayout) {
    let result = &app.form.result;
    frame.render_widget(
        Paragraph::new(result.category_label.as_str()).style(theme.label_style()),
        layout.category_label,
    );
    frame.render_widget(
        Paragraph::new(result.message_label.as_str())
            .style(theme.text_style())
            .wrap(Wrap { trim: true }),
        layout.message_label,
    );
}

/// Four equal colored bands with the indicator above them.
fn render_scale(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let width = area.width as usize;
    let result = &app.form.result;

    let indicator = if result.indicator_visible {
        let column = indicator_column(result.indicator_offset, area.width) as usize;
        Line::from(vec![
            Span::raw(" ".repeat(column)),
            Span::styled("▼", theme.indicator_style()),
        ])
    } else {
        Line::from("")
    };

    let bands: Vec<Span> = band_widths(width)
        .into_iter()
        .zip(Category::ALL)
        .map(|(band_width, category)| {
            Span::styled(" ".repeat(band_width), theme.band_style(category))
        })
        .collect();

    let names: Vec<Span> = band_widths(width)
        .into_iter()
        .zip(Category::ALL)
        .map(|(band_width, category)| {
            let name: String = category.label().chars().take(band_width).collect();
            Span::styled(format!("{:<band_width$}", name), theme.help_style())
        })
        .collect();

    frame.render_widget(
        Paragraph::new(vec![indicator, Line::from(bands), Line::from(names)]),
        area,
    );
}

/// Column of the indicator for an offset in percent on a scale `width` cells wide.
pub fn indicator_column(offset_percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = f64::from(width - 1);
    let column = (offset_percent.clamp(0.0, 100.0) / 100.0 * last).round();
    column as u16
}

/// Cell widths of the four bands; they always add up to `width`.
pub fn band_widths(width: usize) -> [usize; 4] {
    let mut widths = [0; 4];
    let mut start = 0;
    for (i, slot) in widths.iter_mut().enumerate() {
        let end = ((i as f64 + 1.0) * BAND_WIDTH / 100.0 * width as f64).round() as usize;
        *slot = end - start;
        start = end;
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BmiScaleConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        render_sized(app, 80, 24)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_indicator_column() {
        assert_eq!(indicator_column(0.0, 81), 0);
        assert_eq!(indicator_column(50.0, 81), 40);
        assert_eq!(indicator_column(100.0, 81), 80);
        assert_eq!(indicator_column(150.0, 81), 80);
        assert_eq!(indicator_column(50.0, 0), 0);
    }

    #[test]
    fn test_band_widths_cover_scale() {
        for width in [0, 1, 7, 40, 78, 101] {
            assert_eq!(band_widths(width).iter().sum::<usize>(), width);
        }
        assert_eq!(band_widths(80), [20, 20, 20, 20]);
    }

    #[test]
    fn test_blank_form_renders_fields() {
        let app = App::new(&BmiScaleConfig::default());
        let screen = render_to_string(&app);
        assert!(screen.contains("Weight (kg)"));
        assert!(screen.contains("Height (cm)"));
        assert!(!screen.contains(BANNER_TEXT));
        assert!(!screen.contains("▼"));
    }

    #[test]
    fn test_result_renders_labels_and_indicator() {
        let mut app = App::new(&BmiScaleConfig::default());
        type_text(&mut app, "70");
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        type_text(&mut app, "175");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = render_to_string(&app);
        assert!(screen.contains("Normal weight (BMI 22.86)"));
        assert!(screen.contains("▼"));
        assert!(screen.contains("Underweight"));
    }

    #[test]
    fn test_rejected_submit_renders_banner_and_error() {
        let mut app = App::new(&BmiScaleConfig::default());
        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = render_to_string(&app);
        assert!(screen.contains(BANNER_TEXT));
        assert!(screen.contains("Enter a valid weight"));
        assert!(screen.contains("Enter a valid height"));
    }

    #[test]
    fn test_short_terminal_shows_notice() {
        let app = App::new(&BmiScaleConfig::default());
        let screen = render_sized(&app, 80, MIN_HEIGHT - 1);
        assert!(screen.contains("Terminal too small"));
        assert!(!screen.contains("Weight (kg)"));

        let screen = render_sized(&app, 80, MIN_HEIGHT);
        assert!(!screen.contains("Terminal too small"));
        assert!(screen.contains("Weight (kg)"));
    }
}
