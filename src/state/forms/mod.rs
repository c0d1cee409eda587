//! Editing state for the builder and fill-in views

mod form_state;

pub use form_state::{BuilderFocus, BuilderForm, FillForm, FocusCycle};
