//! Error types for table export

use thiserror::Error;

use crate::config::TextEncoding;

/// Failure modes of [`crate::Table::export`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Two or more fields share a heading
    #[error("duplicate headings: {}", .headings.join(", "))]
    DuplicateHeadings { headings: Vec<String> },

    /// The text contains a character the target encoding cannot represent
    #[error("cannot encode {character:?} at byte {position} as {encoding}")]
    TextEncoding {
        encoding: TextEncoding,
        character: char,
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
