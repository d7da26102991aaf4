//! CSV document parser using the csv crate.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Record, TabularDocument};

use super::options::{ErrorMode, ParseOptions};

/// CSV document parser.
///
/// The first record is the header; every later record maps header names
/// to its positional fields. Rows may be ragged: missing trailing fields
/// leave the key absent and extra trailing fields are dropped.
pub struct CsvParser {
    text: String,
    source_name: Option<String>,
    options: ParseOptions,
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Records turned into rows (header excluded)
    pub records: usize,

    /// Whitespace-only lines that were skipped
    pub skipped_blank_lines: usize,

    /// Records dropped because the reader could not decode them (lenient mode)
    pub skipped_records: usize,

    /// Rows whose field count differs from the header
    pub ragged_rows: usize,

    /// Fields beyond the header width that were dropped
    pub extra_fields: usize,

    /// Header names that were renamed to stay unique
    pub renamed_columns: usize,
}

impl CsvParser {
    /// Parse CSV from text.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_options(text, ParseOptions::default())
    }

    /// Parse CSV from text with custom options.
    pub fn from_text_with_options(text: &str, options: ParseOptions) -> Self {
        Self {
            text: text.to_string(),
            source_name: None,
            options,
        }
    }

    /// Parse CSV from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse CSV from bytes with custom options.
    ///
    /// Fails with [`Error::InvalidInput`] if the bytes are not UTF-8 text.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| {
            Error::InvalidInput(format!(
                "input is not UTF-8 text (invalid byte at offset {})",
                e.valid_up_to()
            ))
        })?;
        Ok(Self::from_text_with_options(text, options))
    }

    /// Parse CSV from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse CSV from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Open a CSV file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a CSV file with custom options.
    ///
    /// The file name is kept on the parsed document as its source name.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let mut parser = Self::from_bytes_with_options(&data, options)?;
        parser.source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(parser)
    }

    /// Parse the input into a document.
    pub fn parse(&self) -> Result<TabularDocument> {
        self.parse_with_stats().map(|(doc, _)| doc)
    }

    /// Parse the input into a document and report what was skipped or repaired.
    ///
    /// Fails with [`Error::InvalidInput`] if the options are not a usable
    /// dialect or the header record cannot be decoded, in either error mode.
    pub fn parse_with_stats(&self) -> Result<(TabularDocument, ParseStats)> {
        self.options.validate()?;
        let (doc, stats) = self.read_records()?;

        log::debug!(
            "Parsed {} columns, {} rows ({} ragged, {} blank lines skipped)",
            doc.columns.len(),
            stats.records,
            stats.ragged_rows,
            stats.skipped_blank_lines
        );

        Ok((doc, stats))
    }

    fn read_records(&self) -> Result<(TabularDocument, ParseStats)> {
        // The reader strips a leading UTF-8 BOM itself.
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .quote(self.options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(self.text.as_bytes());

        let mut doc = TabularDocument::new();
        doc.source_name = self.source_name.clone();
        let mut stats = ParseStats::default();
        let mut header_seen = false;

        for (index, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if !header_seen => {
                    return Err(Error::InvalidInput(format!(
                        "header record could not be decoded: {}",
                        e
                    )));
                }
                Err(e) => match self.options.error_mode {
                    ErrorMode::Strict => return Err(e.into()),
                    ErrorMode::Lenient => {
                        log::warn!("Skipping CSV record {}: {}", index + 1, e);
                        stats.skipped_records += 1;
                        continue;
                    }
                },
            };

            if !header_seen {
                doc.columns = self.header_names(&record, &mut stats);
                header_seen = true;
                continue;
            }

            if self.is_blank(&record, doc.columns.len()) {
                stats.skipped_blank_lines += 1;
                continue;
            }

            doc.rows.push(build_record(&doc.columns, &record, &mut stats));
        }

        stats.records = doc.rows.len();
        Ok((doc, stats))
    }

    /// Header names from the first record, made unique.
    fn header_names(&self, record: &StringRecord, stats: &mut ParseStats) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(record.len());

        for field in record.iter() {
            let base = if self.options.trim_headers {
                field.trim()
            } else {
                field
            };

            let mut name = base.to_string();
            let mut suffix = 0;
            while names.contains(&name) {
                suffix += 1;
                name = format!("{}_{}", base, suffix);
            }
            if suffix > 0 {
                log::debug!("Renamed duplicate column {:?} to {:?}", base, name);
                stats.renamed_columns += 1;
            }
            names.push(name);
        }

        names
    }

    /// A whitespace-only line in a multi-column file carries no data.
    ///
    /// Empty lines never reach here; the reader drops them. In a single
    /// column file a lone field is a legitimate (possibly empty) value.
    fn is_blank(&self, record: &StringRecord, column_count: usize) -> bool {
        self.options.skip_blank_lines
            && column_count > 1
            && record.len() == 1
            && record.get(0).is_some_and(|f| f.trim().is_empty())
    }
}

fn build_record(columns: &[String], fields: &StringRecord, stats: &mut ParseStats) -> Record {
    if fields.len() != columns.len() {
        stats.ragged_rows += 1;
    }
    if fields.len() > columns.len() {
        stats.extra_fields += fields.len() - columns.len();
    }

    columns
        .iter()
        .zip(fields.iter())
        .map(|(column, value)| (column.as_str(), value))
        .collect()
}
