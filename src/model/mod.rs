//! Data model for declaring exportable tables

mod field;
mod table;

pub use field::{Accessor, Field, FieldRegistry, FormatFn, Formatter};
pub use table::Table;
