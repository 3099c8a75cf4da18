//! Export pipeline: validation, layout and encoding

mod escape;
mod layout;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::TextEncoding;
use crate::error::{ExportError, Result};
use crate::model::Table;

pub use escape::escape_line;
pub use layout::TableBuilder;

/// Validate, lay out and encode a table
pub fn export<R>(table: &Table<R>) -> Result<Vec<u8>> {
    let headings = table.registry().headings();
    let duplicates = duplicate_headings(&headings);
    if !duplicates.is_empty() {
        warn!(table = %table.name, ?duplicates, "export rejected");
        return Err(ExportError::DuplicateHeadings {
            headings: duplicates,
        });
    }

    let config = table.config();
    debug!(
        table = %table.name,
        fields = table.field_count(),
        records = table.record_count(),
        direction = ?config.direction,
        "exporting table"
    );

    let text = TableBuilder::new(table).build();
    encode(text, config.encoding)
}

/// Headings that occur more than once, each listed once
pub fn duplicate_headings(headings: &[&str]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut duplicates = Vec::new();
    for &heading in headings {
        if !seen.insert(heading) && reported.insert(heading) {
            duplicates.push(heading.to_string());
        }
    }
    duplicates
}

/// Encode text, failing on the first unrepresentable character
pub fn encode(text: String, encoding: TextEncoding) -> Result<Vec<u8>> {
    let Some(max) = encoding.max_code_point() else {
        return Ok(text.into_bytes());
    };

    let mut bytes = Vec::with_capacity(text.len());
    for (position, character) in text.char_indices() {
        let code = character as u32;
        if code > max {
            return Err(ExportError::TextEncoding {
                encoding,
                character,
                position,
            });
        }
        bytes.push(code as u8);
    }
    Ok(bytes)
}
