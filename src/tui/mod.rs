//! Terminal rendering surface for the form.
//!
//! The terminal form is one concrete surface: it keeps a [`FormState`] and
//! draws it with `ratatui`. Every key press is routed through the same
//! handlers any other surface would use.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bmiscale::config::BmiScaleConfig;
//! use bmiscale::tui::TuiManager;
//!
//! let mut tui = TuiManager::new(&BmiScaleConfig::default())?;
//! tui.run()?;
//! // Terminal cleanup happens automatically on drop
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! [`FormState`]: crate::form::FormState

pub mod app;
pub mod layout;
pub mod renderer;
pub mod theme;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::BmiScaleConfig;
use crate::observability::set_tui_active;
use app::App;
use renderer::render_ui;

/// Owns the terminal while the form is shown
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiManager {
    /// Enter raw mode and the alternate screen
    pub fn new(config: &BmiScaleConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(config),
        })
    }

    /// Render the current frame
    pub fn render(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| render_ui(f, &self.app))?;
        Ok(())
    }

    /// Process key presses until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        while !self.app.should_quit() {
            self.render()?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.app.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Clean up and restore terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
