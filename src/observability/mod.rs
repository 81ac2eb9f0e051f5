//! Logging setup and crash reporting.
//!
//! Install both at application startup:
//!
//! ```ignore
//! use bmiscale::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing();
//!     // ... rest of application
//! }
//! ```

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{env_filter, init_tracing, is_tui_active, set_tui_active, LOG_ENV_VAR};
pub use panic_hook::install_panic_hook;
