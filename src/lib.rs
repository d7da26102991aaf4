//! # csvdoc
//!
//! Editable in-memory CSV documents for Rust.
//!
//! This library loads CSV text into a [`TabularDocument`], lets the caller
//! add and delete rows and edit individual cells, and writes the result
//! back out as CSV. Front ends (a terminal, a GUI, a C caller via the `ffi`
//! feature) own the document and call into it for every user action.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csvdoc::parse_file;
//!
//! fn main() -> csvdoc::Result<()> {
//!     let mut doc = parse_file("people.csv")?;
//!
//!     let row = doc.add_row();
//!     doc.set_cell(row, "name", "Carol")?;
//!     doc.delete_row(0)?;
//!
//!     std::fs::write(doc.download_name(), doc.to_csv()?)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Permissive parsing**: ragged rows, stray quotes, blank lines, BOM
//! - **Minimal quoting**: only fields that need it are quoted on output
//! - **Stable header**: column order is fixed by the file, never by edits
//! - **JSON and table views** for front ends

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Record, TabularDocument, DEFAULT_DOWNLOAD_NAME};
pub use parser::{CsvParser, ErrorMode, ParseOptions, ParseStats};
pub use render::{
    JsonFormat, LineEnding, QuoteMode, TableStyle, WriteOptions, CSV_MIME_TYPE,
};

use std::io::Read;
use std::path::Path;

/// Parse CSV text into a document.
///
/// The first line is the header. Parsing is total: malformed quoting is
/// recovered and ragged rows are accepted.
///
/// # Example
///
/// ```
/// let doc = csvdoc::parse_str("name,age\nAlice,30\n").unwrap();
/// assert_eq!(doc.columns, vec!["name", "age"]);
/// assert_eq!(doc.cell(0, "age"), Some("30"));
/// ```
pub fn parse_str(text: &str) -> Result<TabularDocument> {
    CsvParser::from_text(text).parse()
}

/// Parse CSV text with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<TabularDocument> {
    CsvParser::from_text_with_options(text, options).parse()
}

/// Parse CSV from bytes.
///
/// Fails with [`Error::InvalidInput`] if the bytes are not UTF-8.
///
/// # Example
///
/// ```
/// let err = csvdoc::parse_bytes(b"\xff\xfe").unwrap_err();
/// assert!(matches!(err, csvdoc::Error::InvalidInput(_)));
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<TabularDocument> {
    CsvParser::from_bytes(data)?.parse()
}

/// Parse CSV from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<TabularDocument> {
    CsvParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse CSV from a reader.
///
/// # Example
///
/// ```no_run
/// use csvdoc::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("people.csv").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<TabularDocument> {
    CsvParser::from_reader(reader)?.parse()
}

/// Parse CSV from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<TabularDocument> {
    CsvParser::from_reader_with_options(reader, options)?.parse()
}

/// Parse a CSV file. The file name becomes the document's download name.
///
/// # Example
///
/// ```no_run
/// use csvdoc::parse_file;
///
/// let doc = parse_file("people.csv").unwrap();
/// println!("Rows: {}", doc.row_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<TabularDocument> {
    CsvParser::open(path)?.parse()
}

/// Parse a CSV file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<TabularDocument> {
    CsvParser::open_with_options(path, options)?.parse()
}

/// Serialize a document to CSV with default options.
pub fn to_csv(doc: &TabularDocument) -> Result<String> {
    render::to_csv(doc, &WriteOptions::default())
}

/// Serialize a document to JSON.
pub fn to_json(doc: &TabularDocument, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

/// Builder for loading and saving CSV documents with shared settings.
///
/// # Example
///
/// ```no_run
/// use csvdoc::Csvdoc;
///
/// let mut loaded = Csvdoc::new()
///     .with_delimiter(b';')
///     .crlf()
///     .parse_file("export.csv")?;
///
/// loaded.document_mut().set_cell(0, "status", "done")?;
/// loaded.save("export.csv")?;
/// # Ok::<(), csvdoc::Error>(())
/// ```
pub struct Csvdoc {
    parse_options: ParseOptions,
    write_options: WriteOptions,
}

impl Csvdoc {
    /// Create a new Csvdoc builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            write_options: WriteOptions::default(),
        }
    }

    /// Fail on undecodable records instead of skipping them.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Use the same delimiter for reading and writing.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.parse_options = self.parse_options.with_delimiter(delimiter);
        self.write_options = self.write_options.with_delimiter(delimiter);
        self
    }

    /// Trim whitespace around header names.
    pub fn trim_headers(mut self) -> Self {
        self.parse_options = self.parse_options.with_trim_headers(true);
        self
    }

    /// Write CRLF line endings.
    pub fn crlf(mut self) -> Self {
        self.write_options = self.write_options.crlf();
        self
    }

    /// Set the quoting mode for output.
    pub fn with_quote_mode(mut self, mode: QuoteMode) -> Self {
        self.write_options = self.write_options.with_quote_mode(mode);
        self
    }

    /// Parse CSV text.
    pub fn parse_str(self, text: &str) -> Result<CsvdocResult> {
        let parser = CsvParser::from_text_with_options(text, self.parse_options);
        Self::finish(parser, self.write_options)
    }

    /// Parse CSV bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<CsvdocResult> {
        let parser = CsvParser::from_bytes_with_options(data, self.parse_options)?;
        Self::finish(parser, self.write_options)
    }

    /// Parse a CSV file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<CsvdocResult> {
        let parser = CsvParser::open_with_options(path, self.parse_options)?;
        Self::finish(parser, self.write_options)
    }

    fn finish(parser: CsvParser, write_options: WriteOptions) -> Result<CsvdocResult> {
        let (document, stats) = parser.parse_with_stats()?;
        Ok(CsvdocResult {
            document,
            stats,
            write_options,
        })
    }
}

impl Default for Csvdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document together with its parse statistics and write settings.
pub struct CsvdocResult {
    /// The parsed document
    pub document: TabularDocument,
    /// What the parser skipped or repaired
    pub stats: ParseStats,
    /// Write options to use
    write_options: WriteOptions,
}

impl CsvdocResult {
    /// Get the document.
    pub fn document(&self) -> &TabularDocument {
        &self.document
    }

    /// Get the document for editing.
    pub fn document_mut(&mut self) -> &mut TabularDocument {
        &mut self.document
    }

    /// Serialize to CSV.
    pub fn to_csv(&self) -> Result<String> {
        render::to_csv(&self.document, &self.write_options)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render a text table.
    pub fn to_table(&self, style: TableStyle) -> String {
        render::to_table(&self.document, style)
    }

    /// Write CSV to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_file(&self.document, path, &self.write_options)
    }

    /// Take the document out of the result.
    pub fn into_document(self) -> TabularDocument {
        self.document
    }
}
