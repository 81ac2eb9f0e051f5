//! Tracing subscriber setup.
//!
//! Log lines go to stderr, filtered by the `BMISCALE_LOG` environment variable
//! (same syntax as `RUST_LOG`, default `warn`). While the terminal form owns
//! the screen, output is dropped so it cannot corrupt the display.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "BMISCALE_LOG";

const DEFAULT_FILTER: &str = "warn";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the terminal UI currently owns the screen.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

fn log_writer() -> Box<dyn Write> {
    if is_tui_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Build the filter from the environment, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_writer)
        .with_target(false)
        .try_init()
        .is_ok()
}
