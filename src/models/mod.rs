//! Data models
//!
//! The values that flow between the form, the library and the daily totals.

mod library;
mod macros;
mod record;

pub use library::Library;
pub use macros::Macros;
pub use record::omit;
