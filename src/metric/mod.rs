//! Derived metric: computation, banding, scale position and advice text.

pub mod advice;
pub mod category;
pub mod evaluator;
pub mod scale;

pub use advice::{advice_message, IdealRange};
pub use category::Category;
pub use evaluator::{Evaluation, MetricEvaluator, Submission, METRIC_DIGITS};
pub use scale::{scale_position, BAND_WIDTH, SCALE_CEILING};
