//! Rendering module for converting documents to output formats.

mod csv_writer;
mod json;
mod options;
mod table;

pub use csv_writer::{to_csv, write_file, CSV_MIME_TYPE};
pub use json::{to_json, JsonFormat};
pub use options::{LineEnding, QuoteMode, TableStyle, WriteOptions};
pub use table::to_table;
