//! Document-level types.

use super::Record;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// File name offered for download when the document was not loaded from a file.
pub const DEFAULT_DOWNLOAD_NAME: &str = "edited.csv";

/// An editable table decoded from CSV text.
///
/// `columns` is fixed once established by parsing; edits never add to it.
/// Each row is a [`Record`] keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDocument {
    /// Header names in file order
    pub columns: Vec<String>,

    /// Records in display and serialization order
    pub rows: Vec<Record>,

    /// Name of the file the document was loaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl TabularDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with a pre-established header.
    pub fn with_columns<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Header names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get a record by index (0-based).
    pub fn row(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Get a cell value. `None` if the row does not exist or the key is absent.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of header columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the document has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a record with no keys set and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Record::new());
        self.rows.len() - 1
    }

    /// Remove the record at `index` and return it.
    ///
    /// Out-of-range indices are rejected and the document is left unchanged.
    pub fn delete_row(&mut self, index: usize) -> Result<Record> {
        self.check_row(index)?;
        Ok(self.rows.remove(index))
    }

    /// Set `rows[row][column] = value`, creating the key if absent.
    ///
    /// `column` need not be one of `columns`. Such a value is stored on the
    /// record only; the header is not extended, so it is not serialized
    /// while the document has columns.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.check_row(row)?;
        self.rows[row].set(column, value);
        Ok(())
    }

    /// Columns used for serialization and display.
    ///
    /// The header when one is established; otherwise the union of record
    /// keys in first-seen order.
    pub fn effective_columns(&self) -> Vec<String> {
        if !self.columns.is_empty() {
            return self.columns.clone();
        }

        let mut columns: Vec<String> = Vec::new();
        for key in self.rows.iter().flat_map(|r| r.keys()) {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
        columns
    }

    /// Serialize to CSV with default write options.
    pub fn to_csv(&self) -> Result<String> {
        crate::render::to_csv(self, &crate::render::WriteOptions::default())
    }

    /// Record the name of the file this document came from.
    pub fn set_source_name(&mut self, name: impl Into<String>) {
        self.source_name = Some(name.into());
    }

    /// File name to save the edited document under.
    pub fn download_name(&self) -> &str {
        match self.source_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DOWNLOAD_NAME,
        }
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularDocument {
        let mut doc = TabularDocument::with_columns(["name", "age"]);
        doc.rows.push(Record::from_pairs([("name", "Alice"), ("age", "30")]));
        doc.rows.push(Record::from_pairs([("name", "Bob"), ("age", "25")]));
        doc
    }

    #[test]
    fn test_document_new() {
        let doc = TabularDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.row_count(), 0);
        assert_eq!(doc.column_count(), 0);
    }

    #[test]
    fn test_add_row_appends_blank() {
        let mut doc = sample();
        let before = doc.clone();
        let index = doc.add_row();

        assert_eq!(index, 2);
        assert_eq!(doc.row_count(), 3);
        assert!(doc.rows[2].is_empty());
        assert_eq!(&doc.rows[..2], &before.rows[..]);
    }

    #[test]
    fn test_delete_row() {
        let mut doc = sample();
        let removed = doc.delete_row(0).unwrap();

        assert_eq!(removed.get("name"), Some("Alice"));
        assert_eq!(doc.row_count(), 1);
        assert_eq!(doc.cell(0, "name"), Some("Bob"));
    }

    #[test]
    fn test_delete_row_out_of_range() {
        let mut doc = sample();
        let before = doc.clone();
        let err = doc.delete_row(2).unwrap_err();

        assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_cell_isolated() {
        let mut doc = sample();
        let before = doc.clone();
        doc.set_cell(1, "age", "26").unwrap();

        assert_eq!(doc.cell(1, "age"), Some("26"));
        assert_eq!(doc.rows[0], before.rows[0]);
        assert_eq!(doc.cell(1, "name"), Some("Bob"));
        assert_eq!(doc.columns, before.columns);
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut doc = TabularDocument::new();
        let err = doc.set_cell(0, "name", "Carol").unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0 }));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_set_cell_unknown_column_keeps_header() {
        let mut doc = sample();
        doc.set_cell(0, "email", "alice@example.com").unwrap();

        assert_eq!(doc.cell(0, "email"), Some("alice@example.com"));
        assert_eq!(doc.columns, vec!["name", "age"]);
    }

    #[test]
    fn test_effective_columns_without_header() {
        let mut doc = TabularDocument::new();
        doc.add_row();
        doc.set_cell(0, "name", "Carol").unwrap();
        doc.add_row();
        doc.set_cell(1, "city", "Oslo").unwrap();
        doc.set_cell(1, "name", "Dan").unwrap();

        assert_eq!(doc.effective_columns(), vec!["name", "city"]);
    }

    #[test]
    fn test_download_name() {
        let mut doc = TabularDocument::new();
        assert_eq!(doc.download_name(), "edited.csv");

        doc.set_source_name("people.csv");
        assert_eq!(doc.download_name(), "people.csv");

        doc.set_source_name("");
        assert_eq!(doc.download_name(), DEFAULT_DOWNLOAD_NAME);
    }
}
