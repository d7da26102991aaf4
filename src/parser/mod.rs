//! CSV parsing module.
//!
//! This module turns raw CSV text into a [`TabularDocument`](crate::model::TabularDocument).

mod csv_parser;
mod options;

pub use csv_parser::{CsvParser, ParseStats};
pub use options::{ErrorMode, ParseOptions};
