//! Error types for csvdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for csvdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, editing, or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not CSV text (e.g. not valid UTF-8, or a null pointer).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A row mutation addressed a row that does not exist.
    #[error("Row {index} is out of range (document has {len} rows)")]
    IndexOutOfRange {
        /// Requested row index (0-based)
        index: usize,
        /// Number of rows at the time of the request
        len: usize,
    },

    /// Error reported by the CSV reader or writer.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error during rendering (CSV, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => Error::Io(e),
                other => Error::Csv(format!("{:?}", other)),
            }
        } else {
            match err.kind() {
                csv::ErrorKind::Utf8 { .. } => Error::InvalidInput(err.to_string()),
                _ => Error::Csv(err.to_string()),
            }
        }
    }
}
