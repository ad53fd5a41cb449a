//! Common reusable UI components

pub mod form;
pub mod spinner;

pub use form::{FormField, TextAreaField};
pub use spinner::{InlineSpinner, Spinner, SpinnerSize};
