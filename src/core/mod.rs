//! Core types shared by the input pipeline, the evaluator and the surfaces.

pub mod errors;
pub mod field;

pub use errors::{Error, InputError, Result, SubmitError};
pub use field::{FieldFeedback, FieldKind, MeasurementField};
