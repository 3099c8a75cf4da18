//! Field declarations and value formatting

use rustc_hash::FxHashMap;

use crate::config::ExportConfig;

/// Type-erased accessor: `None` means the value is absent
pub type Accessor<R> = Box<dyn Fn(&R) -> Option<String>>;

/// Caller-supplied formatting closure
pub type FormatFn = Box<dyn Fn(Option<&str>) -> String>;

/// Formatting applied to every cell of a field
pub enum Formatter {
    /// Substitute the table's empty/nil defaults, as configured at export time
    Default,
    /// Replaces the default policy entirely
    Custom(FormatFn),
}

impl Formatter {
    /// Produce the final cell text for a raw value
    pub fn apply(&self, value: Option<&str>, config: &ExportConfig) -> String {
        match self {
            Formatter::Default => match value {
                None => config.nil_value.clone(),
                Some("") => config.empty_value.clone(),
                Some(v) => v.to_string(),
            },
            Formatter::Custom(f) => f(value),
        }
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formatter::Default => write!(f, "Default"),
            Formatter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// A named binding between a heading and a value accessor
pub struct Field<R> {
    /// Heading used as column header or row label
    pub name: String,
    accessor: Accessor<R>,
}

impl<R> Field<R> {
    pub fn new(name: impl Into<String>, accessor: Accessor<R>) -> Self {
        Self {
            name: name.into(),
            accessor,
        }
    }

    /// Extract the stringified value from a record
    pub fn extract(&self, record: &R) -> Option<String> {
        (self.accessor)(record)
    }
}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Ordered field list plus the formatter slots
///
/// Formatter slots are addressed by heading. Registering a heading twice
/// replaces the earlier slot; export rejects the table before that can
/// reach the output.
pub struct FieldRegistry<R> {
    fields: Vec<Field<R>>,
    formatters: FxHashMap<String, Formatter>,
}

impl<R> Default for FieldRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FieldRegistry<R> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            formatters: FxHashMap::default(),
        }
    }

    /// Append a field; duplicates are accepted here and caught at export
    pub fn push(&mut self, name: impl Into<String>, accessor: Accessor<R>, formatter: Option<FormatFn>) {
        let name = name.into();
        let formatter = match formatter {
            Some(f) => Formatter::Custom(f),
            None => Formatter::Default,
        };
        self.formatters.insert(name.clone(), formatter);
        self.fields.push(Field::new(name, accessor));
    }

    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// Headings in registration order
    pub fn headings(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn formatter(&self, name: &str) -> Option<&Formatter> {
        self.formatters.get(name)
    }

    /// Extract and format one cell
    pub fn cell(&self, field: &Field<R>, record: &R, config: &ExportConfig) -> String {
        let raw = field.extract(record);
        match self.formatters.get(&field.name) {
            Some(formatter) => formatter.apply(raw.as_deref(), config),
            // every pushed field has a slot
            None => Formatter::Default.apply(raw.as_deref(), config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExportConfig {
        ExportConfig::new().with_empty_value("EMPTY").with_nil_value("NIL")
    }

    #[test]
    fn test_default_formatter() {
        let config = config();
        assert_eq!(Formatter::Default.apply(None, &config), "NIL");
        assert_eq!(Formatter::Default.apply(Some(""), &config), "EMPTY");
        assert_eq!(Formatter::Default.apply(Some("x"), &config), "x");
    }

    #[test]
    fn test_custom_formatter_replaces_policy() {
        let formatter = Formatter::Custom(Box::new(|v: Option<&str>| match v {
            Some(v) => v.to_uppercase(),
            None => "?".to_string(),
        }));
        let config = config();
        assert_eq!(formatter.apply(Some(""), &config), "");
        assert_eq!(formatter.apply(None, &config), "?");
        assert_eq!(formatter.apply(Some("ab"), &config), "AB");
    }

    #[test]
    fn test_reused_name_overwrites_formatter_slot() {
        let mut registry: FieldRegistry<String> = FieldRegistry::new();
        registry.push("a", Box::new(|r: &String| Some(r.clone())), Some(Box::new(|_: Option<&str>| "custom".to_string())));
        registry.push("a", Box::new(|r: &String| Some(r.clone())), None);

        assert_eq!(registry.len(), 2);
        assert!(matches!(registry.formatter("a"), Some(Formatter::Default)));
        let record = "v".to_string();
        let cells: Vec<_> = registry
            .fields()
            .iter()
            .map(|f| registry.cell(f, &record, &config()))
            .collect();
        assert_eq!(cells, vec!["v", "v"]);
    }
}
