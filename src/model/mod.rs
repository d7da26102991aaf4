//! Document model types for tabular content.
//!
//! A [`TabularDocument`] owns the header and the records decoded from CSV
//! text. It is the value a presentation layer holds while the user edits,
//! and it is replaced wholesale when another file is loaded.

mod document;
mod record;

pub use document::{TabularDocument, DEFAULT_DOWNLOAD_NAME};
pub use record::Record;
