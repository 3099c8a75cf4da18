//! Record sources for the command-line exporter

mod csv;
mod json;

use std::path::Path;

use anyhow::{bail, Result};
use indexmap::IndexMap;

pub use self::csv::CsvRecordParser;
pub use self::json::JsonRecordParser;

/// A loosely-typed input record: column name to optional text
pub type Record = IndexMap<String, Option<String>>;

/// Records read from a file, with columns in first-seen order
#[derive(Debug, Default)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

/// Trait for reading record files
pub trait RecordParser: Send + Sync {
    /// Parse a file into records
    fn parse(&self, path: &Path) -> Result<RecordSet>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for selecting a parser by file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn RecordParser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvRecordParser), Box::new(JsonRecordParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn RecordParser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported file format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path) -> Result<RecordSet> {
        let parser = self.get_parser(path)?;
        parser.parse(path)
    }
}
