//! The form: its state, the surface contract, and the event handlers.
//!
//! ```rust
//! use bmiscale::core::FieldKind;
//! use bmiscale::form::{FormHandlers, FormState};
//!
//! let handlers = FormHandlers::default();
//! let mut state = FormState::with_texts("70", "175");
//!
//! handlers.handle_input(&state, FieldKind::Primary).apply(&mut state);
//! handlers.handle_submit(&state).apply(&mut state);
//!
//! assert_eq!(state.result.category_label, "Normal weight (BMI 22.86)");
//! ```

pub mod handlers;
pub mod instruction;
pub mod surface;

pub use handlers::FormHandlers;
pub use instruction::{FieldUpdate, RenderInstruction, ResultUpdate};
pub use surface::{field_error_text, FormState, FormSurface, ResultView, BANNER_TEXT};
