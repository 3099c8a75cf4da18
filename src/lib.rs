//! tablecsv - Export typed records as quoted CSV
//!
//! Declare named fields over any record type, then export the table
//! row by row (vertical) or field by field (horizontal).

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;

pub use config::{Direction, ExportConfig, TextEncoding};
pub use error::ExportError;
pub use model::Table;
