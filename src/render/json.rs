//! JSON rendering for tabular documents.

use crate::error::{Error, Result};
use crate::model::TabularDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// The output is `{"columns": [...], "rows": [{...}]}`, with each row's
/// keys in insertion order.
pub fn to_json(doc: &TabularDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_to_json_pretty() {
        let mut doc = TabularDocument::with_columns(["name"]);
        doc.rows.push(Record::from_pairs([("name", "Alice")]));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"columns\""));
        assert!(json.contains("Alice"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = TabularDocument::with_columns(["name", "age"]);
        doc.rows.push(Record::from_pairs([("name", "Bob"), ("age", "25")]));

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"columns":["name","age"],"rows":[{"name":"Bob","age":"25"}]}"#
        );
    }

    #[test]
    fn test_to_json_includes_source_name() {
        let mut doc = TabularDocument::new();
        doc.set_source_name("people.csv");

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains(r#""source_name":"people.csv""#));

        let back: TabularDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
