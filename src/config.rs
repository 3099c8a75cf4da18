//! Export configuration for tablecsv

use serde::{Deserialize, Serialize};

/// Orientation of the exported grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One row per record, headings on the first line
    #[default]
    Vertical,
    /// One row per field, heading as the first cell of each row
    Horizontal,
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertical" => Ok(Direction::Vertical),
            "horizontal" => Ok(Direction::Horizontal),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// Byte encoding applied to the finished text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl TextEncoding {
    /// Highest code point this encoding can represent, if limited
    pub(crate) fn max_code_point(self) -> Option<u32> {
        match self {
            TextEncoding::Utf8 => None,
            TextEncoding::Ascii => Some(0x7F),
            TextEncoding::Latin1 => Some(0xFF),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Ascii => write!(f, "ascii"),
            TextEncoding::Latin1 => write!(f, "latin-1"),
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(format!("Unknown encoding: {}", s)),
        }
    }
}

/// Settings read by a table at export time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Replaces values that stringify to the empty string
    pub empty_value: String,
    /// Replaces absent values of optional fields
    pub nil_value: String,
    /// Layout of the output grid
    pub direction: Direction,
    /// Encoding of the output bytes
    pub encoding: TextEncoding,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement for empty values
    pub fn with_empty_value(mut self, value: impl Into<String>) -> Self {
        self.empty_value = value.into();
        self
    }

    /// Set the replacement for absent values
    pub fn with_nil_value(mut self, value: impl Into<String>) -> Self {
        self.nil_value = value.into();
        self
    }

    /// Set the layout direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the output encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
