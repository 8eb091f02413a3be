//! Input components
//!
//! Draft form, its fields and the library buttons. They never touch the
//! totals or the library directly; results go back through callbacks.

pub mod fields;
pub mod form;
pub mod library;

pub use fields::{coerce_number, FieldView, NumberField, TextField};
pub use form::{DraftField, NewEntryForm, Submission};
pub use library::{library_buttons, LibraryButton};
