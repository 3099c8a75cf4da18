//! CSV record parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::{Record, RecordParser, RecordSet};

/// Parser for CSV files with a header row
pub struct CsvRecordParser;

impl CsvRecordParser {
    /// Read records from any reader
    pub fn read<R: Read>(reader: R) -> Result<RecordSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for (line_num, result) in csv_reader.records().enumerate() {
            let row = result.with_context(|| format!("Failed to read CSV row {}", line_num + 2))?; // +2 for 1-indexing and header

            // Short rows leave trailing columns absent
            let record: Record = columns
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), row.get(i).map(str::to_string)))
                .collect();
            records.push(record);
        }

        Ok(RecordSet { columns, records })
    }
}

impl RecordParser for CsvRecordParser {
    fn parse(&self, path: &Path) -> Result<RecordSet> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        Self::read(BufReader::new(file))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "txt")
    }
}
