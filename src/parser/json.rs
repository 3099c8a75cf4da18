//! JSON record parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use serde_json::Value;

use super::{Record, RecordParser, RecordSet};

/// Parser for JSON arrays of objects
pub struct JsonRecordParser;

impl JsonRecordParser {
    /// Read records from any reader
    pub fn read<R: Read>(reader: R) -> Result<RecordSet> {
        let value: Value = serde_json::from_reader(reader).context("Failed to parse JSON")?;
        let Value::Array(items) = value else {
            bail!("Expected a JSON array of objects");
        };

        let mut columns: IndexSet<String> = IndexSet::new();
        let mut objects = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(map) = item else {
                bail!("Element {} is not a JSON object", index);
            };
            columns.extend(map.keys().cloned());
            objects.push(map);
        }

        let records = objects
            .iter()
            .map(|map| {
                columns
                    .iter()
                    .map(|name| (name.clone(), map.get(name).and_then(value_to_text)))
                    .collect::<Record>()
            })
            .collect();

        Ok(RecordSet {
            columns: columns.into_iter().collect(),
            records,
        })
    }
}

/// Text form of a JSON value; `null` is absent
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl RecordParser for JsonRecordParser {
    fn parse(&self, path: &Path) -> Result<RecordSet> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        Self::read(BufReader::new(file))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}
