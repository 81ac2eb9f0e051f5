// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod form;
pub mod input;
pub mod metric;
pub mod observability;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    Error, FieldFeedback, FieldKind, InputError, MeasurementField, Result, SubmitError,
};

pub use crate::config::{load_config, BmiScaleConfig, InputLimits, PresetLevel, RangeLimits};

pub use crate::input::{InputSanitizer, Validator};

pub use crate::metric::{
    scale_position, Category, Evaluation, IdealRange, MetricEvaluator, Submission,
};

pub use crate::form::{
    FieldUpdate, FormHandlers, FormState, FormSurface, RenderInstruction, ResultUpdate,
};
