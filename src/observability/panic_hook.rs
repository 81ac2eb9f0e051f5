//! Custom panic hook for crash reports.
//!
//! The hook leaves the terminal form first (raw mode, alternate screen) so
//! the report is readable, then prints what happened and where.

use super::tracing::{is_tui_active, set_tui_active};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook.
///
/// Call early in `main`, before the terminal form is started.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    eprintln!();
    eprintln!("bmiscale {} crashed ({}, {})", VERSION, std::env::consts::OS, timestamp);
    eprintln!("  panic: {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    eprintln!("  set RUST_BACKTRACE=1 for a backtrace");
}

fn exit_tui_mode() {
    if !is_tui_active() {
        return;
    }
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen);
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
