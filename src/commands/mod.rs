//! CLI command implementations.
//!
//! Available commands:
//! - **form**: open the interactive terminal form
//! - **evaluate**: submit one weight/height pair and print the result
//! - **sanitize**: run the keystroke pipeline on a text
//! - **init**: write a default configuration file

pub mod evaluate;
pub mod form;
pub mod init;
pub mod sanitize;

pub use evaluate::{evaluate, EvaluateReport};
pub use form::run_form;
pub use init::init_config;
pub use sanitize::{sanitize, SanitizeReport};
