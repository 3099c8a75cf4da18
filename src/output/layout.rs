//! Vertical and horizontal grid layouts

use crate::config::Direction;
use crate::model::{Field, Table};

use super::escape::escape_line;

/// Builds CSV text from a table in either orientation
pub struct TableBuilder<'a, R> {
    table: &'a Table<R>,
}

impl<'a, R> TableBuilder<'a, R> {
    pub fn new(table: &'a Table<R>) -> Self {
        Self { table }
    }

    /// Render using the table's configured direction
    pub fn build(&self) -> String {
        match self.table.config().direction {
            Direction::Vertical => self.vertical(),
            Direction::Horizontal => self.horizontal(),
        }
    }

    /// One heading line, then one line per record
    pub fn vertical(&self) -> String {
        let registry = self.table.registry();
        let mut text = escape_line(&registry.headings());
        for record in self.table.records() {
            text += &self.line(None, registry.fields().iter().map(|f| (f, record)));
        }
        text
    }

    /// One line per field, led by the heading
    pub fn horizontal(&self) -> String {
        let mut text = String::new();
        for field in self.table.registry().fields() {
            text += &self.line(
                Some(field.name.as_str()),
                self.table.records().iter().map(|r| (field, r)),
            );
        }
        text
    }

    /// Format each (field, record) cell and escape the row
    fn line<'b, I>(&self, lead: Option<&str>, cells: I) -> String
    where
        I: Iterator<Item = (&'b Field<R>, &'b R)>,
        R: 'b,
    {
        let registry = self.table.registry();
        let config = self.table.config();
        let mut row: Vec<String> = lead.map(str::to_string).into_iter().collect();
        row.extend(cells.map(|(field, record)| registry.cell(field, record, config)));
        escape_line(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table<(i32, &'static str)> {
        let mut table = Table::new("t", vec![(1, "one"), (2, "")]);
        table.add_field("n", |r: &(i32, &'static str)| r.0);
        table.add_field("word", |r: &(i32, &'static str)| r.1);
        table.set_empty_value("-");
        table
    }

    #[test]
    fn test_vertical() {
        let table = table();
        assert_eq!(
            TableBuilder::new(&table).vertical(),
            "\"n\",\"word\"\n\"1\",\"one\"\n\"2\",\"-\"\n"
        );
    }

    #[test]
    fn test_horizontal() {
        let table = table();
        assert_eq!(
            TableBuilder::new(&table).horizontal(),
            "\"n\",\"1\",\"2\"\n\"word\",\"one\",\"-\"\n"
        );
    }

    #[test]
    fn test_build_follows_direction() {
        let mut table = table();
        table.set_direction(Direction::Horizontal);
        let builder = TableBuilder::new(&table);
        assert_eq!(builder.build(), builder.horizontal());
    }

    #[test]
    fn test_no_fields() {
        let table: Table<i32> = Table::new("t", vec![1, 2]);
        let builder = TableBuilder::new(&table);
        assert_eq!(builder.vertical(), "");
        assert_eq!(builder.horizontal(), "");
    }
}
