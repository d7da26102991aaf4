//! CSV serialization for tabular documents.

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{LineEnding, QuoteMode, WriteOptions};
use crate::error::{Error, Result};
use crate::model::TabularDocument;

/// MIME type for downloaded CSV files.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

const UTF8_BOM: char = '\u{feff}';

/// Convert a document to CSV text.
///
/// Fields are written in the order of [`TabularDocument::effective_columns`];
/// absent keys become empty fields and keys outside the columns are not
/// written. A document with no effective columns produces an empty string.
///
/// CSV readers drop a leading UTF-8 BOM, so when the header is written and
/// the first column name itself starts with U+FEFF the output is prefixed
/// with one extra BOM to keep that name intact on the next parse.
pub fn to_csv(doc: &TabularDocument, options: &WriteOptions) -> Result<String> {
    let columns = doc.effective_columns();
    if columns.is_empty() {
        return Ok(String::new());
    }

    let terminator = match options.line_ending {
        LineEnding::Lf => Terminator::Any(b'\n'),
        LineEnding::Crlf => Terminator::CRLF,
    };
    let quote_style = match options.quote_mode {
        QuoteMode::Necessary => QuoteStyle::Necessary,
        QuoteMode::Always => QuoteStyle::Always,
    };

    let mut out = Vec::new();
    if options.include_header && columns[0].starts_with(UTF8_BOM) {
        out.extend_from_slice(UTF8_BOM.to_string().as_bytes());
    }

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(terminator)
        .quote_style(quote_style)
        .flexible(false)
        .from_writer(out);

    if options.include_header {
        writer.write_record(&columns)?;
    }
    for row in &doc.rows {
        writer.write_record(row.values_for(&columns))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV writer flush error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| Error::Render(format!("CSV output is not UTF-8: {}", e)))
}

/// Write a document to a CSV file.
pub fn write_file<P: AsRef<Path>>(
    doc: &TabularDocument,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    let content = to_csv(doc, options)?;
    fs::write(path.as_ref(), content)?;
    log::debug!(
        "Wrote {} rows to {}",
        doc.row_count(),
        path.as_ref().display()
    );
    Ok(())
}
