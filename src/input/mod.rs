//! Per-field input handling: validation and keystroke sanitizing.

pub mod numeric;
pub mod sanitize;
pub mod validate;

pub use sanitize::{clamp_fraction_digits, clamp_integer_length, strip_whitespace, InputSanitizer};
pub use validate::{matches_grammar, normalize, FieldCheck, Validator};
