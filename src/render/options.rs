//! Write options and configuration.

/// Options for writing a document back to CSV.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Record terminator
    pub line_ending: LineEnding,

    /// When to quote fields
    pub quote_mode: QuoteMode,

    /// Write the header line
    pub include_header: bool,
}

impl WriteOptions {
    /// Create new write options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the line ending.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Use CRLF line endings.
    pub fn crlf(self) -> Self {
        self.with_line_ending(LineEnding::Crlf)
    }

    /// Set the quoting mode.
    pub fn with_quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    /// Include or omit the header line.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            line_ending: LineEnding::Lf,
            quote_mode: QuoteMode::Necessary,
            include_header: true,
        }
    }
}

/// Record terminator for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

/// Field quoting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// Quote only fields containing the delimiter, a quote, or a line break
    #[default]
    Necessary,
    /// Quote every field
    Always,
}

/// Layout for the text table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Markdown pipe table
    #[default]
    Markdown,
    /// Space-padded columns
    Plain,
}
