//! Parsing options and configuration.

use crate::error::{Error, Result};

/// Options for parsing CSV text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Field delimiter byte
    pub delimiter: u8,

    /// Quote byte
    pub quote: u8,

    /// Skip lines that carry no data
    pub skip_blank_lines: bool,

    /// Trim surrounding whitespace from header names
    pub trim_headers: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip records the reader cannot decode).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable strict mode (fail on the first undecodable record).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Keep or skip blank lines.
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Trim whitespace around header names.
    pub fn with_trim_headers(mut self, trim: bool) -> Self {
        self.trim_headers = trim;
        self
    }

    /// Check that the options describe a dialect the reader can split.
    ///
    /// The delimiter and quote must be ASCII: a non-ASCII byte would cut
    /// UTF-8 sequences apart.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::InvalidInput(format!(
                "delimiter must be an ASCII byte, got 0x{:02X}",
                self.delimiter
            )));
        }
        if !self.quote.is_ascii() {
            return Err(Error::InvalidInput(format!(
                "quote must be an ASCII byte, got 0x{:02X}",
                self.quote
            )));
        }
        if self.delimiter == self.quote {
            return Err(Error::InvalidInput(
                "delimiter and quote must differ".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            delimiter: b',',
            quote: b'"',
            skip_blank_lines: true,
            trim_headers: false,
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any record error
    Strict,
    /// Skip undecodable records and continue
    #[default]
    Lenient,
}
