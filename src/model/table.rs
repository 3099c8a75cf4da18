//! Table of records bound to declared fields

use std::fmt::Display;

use crate::config::{Direction, ExportConfig, TextEncoding};
use crate::error::Result;

use super::field::FieldRegistry;

/// Records of type `R` plus the fields that turn them into CSV
pub struct Table<R> {
    /// Identifying name, also used for the default file name
    pub name: String,
    records: Vec<R>,
    config: ExportConfig,
    registry: FieldRegistry<R>,
}

impl<R> Table<R> {
    /// Create a table with default settings and no fields
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            records,
            config: ExportConfig::default(),
            registry: FieldRegistry::new(),
        }
    }

    /// Replace all export settings
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn set_empty_value(&mut self, value: impl Into<String>) {
        self.config.empty_value = value.into();
    }

    pub fn set_nil_value(&mut self, value: impl Into<String>) {
        self.config.nil_value = value.into();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.config.encoding = encoding;
    }

    /// Register a field whose value is always present
    pub fn add_field<V, F>(&mut self, name: impl Into<String>, accessor: F)
    where
        V: Display,
        F: Fn(&R) -> V + 'static,
    {
        self.registry
            .push(name, Box::new(move |r: &R| Some(accessor(r).to_string())), None);
    }

    /// Register a field with a custom formatter
    pub fn add_field_formatted<V, F, G>(&mut self, name: impl Into<String>, accessor: F, formatter: G)
    where
        V: Display,
        F: Fn(&R) -> V + 'static,
        G: Fn(Option<&str>) -> String + 'static,
    {
        self.registry.push(
            name,
            Box::new(move |r: &R| Some(accessor(r).to_string())),
            Some(Box::new(formatter)),
        );
    }

    /// Register a field whose value may be absent
    pub fn add_optional_field<V, F>(&mut self, name: impl Into<String>, accessor: F)
    where
        V: Display,
        F: Fn(&R) -> Option<V> + 'static,
    {
        self.registry
            .push(name, Box::new(move |r: &R| accessor(r).map(|v| v.to_string())), None);
    }

    /// Register an optional field with a custom formatter
    pub fn add_optional_field_formatted<V, F, G>(
        &mut self,
        name: impl Into<String>,
        accessor: F,
        formatter: G,
    ) where
        V: Display,
        F: Fn(&R) -> Option<V> + 'static,
        G: Fn(Option<&str>) -> String + 'static,
    {
        self.registry.push(
            name,
            Box::new(move |r: &R| accessor(r).map(|v| v.to_string())),
            Some(Box::new(formatter)),
        );
    }

    pub fn registry(&self) -> &FieldRegistry<R> {
        &self.registry
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }

    pub fn push_record(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of registered fields
    pub fn field_count(&self) -> usize {
        self.registry.len()
    }

    /// File name a caller would save the export under
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    /// Render the table to bytes in its configured layout and encoding
    pub fn export(&self) -> Result<Vec<u8>> {
        crate::output::export(self)
    }
}

impl<R> std::fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("records", &self.records.len())
            .field("config", &self.config)
            .field("fields", &self.registry.headings())
            .finish()
    }
}
