//! Integration tests for parsing and round-tripping CSV.

use std::fs;

use csvdoc::{
    parse_bytes, parse_file, parse_str, parse_str_with_options, to_csv, CsvParser, Error,
    ParseOptions,
};

const SAMPLES: &[&str] = &[
    "name,age\nAlice,30\nBob,25\n",
    "name,note\nAlice,\"hello, world\"\n",
    "a,b\n\"line\nbreak\",\"quote \"\"q\"\"\"\n",
    "id,empty,last\n1,,x\n2,,y\n",
    "only\nvalue\n\"\"\n",
    "h1,h2\n",
];

#[test]
fn test_round_trip_preserves_columns_and_rows() {
    for text in SAMPLES {
        let doc = parse_str(text).unwrap();
        let again = parse_str(&to_csv(&doc).unwrap()).unwrap();

        assert_eq!(again.columns, doc.columns, "columns differ for {:?}", text);
        assert_eq!(again.rows, doc.rows, "rows differ for {:?}", text);
    }
}

#[test]
fn test_serialize_is_idempotent() {
    for text in SAMPLES {
        let doc = parse_str(text).unwrap();
        assert_eq!(to_csv(&doc).unwrap(), to_csv(&doc).unwrap());
    }
}

#[test]
fn test_well_formed_text_is_reproduced() {
    for text in SAMPLES {
        let doc = parse_str(text).unwrap();
        assert_eq!(to_csv(&doc).unwrap(), *text);
    }
}

#[test]
fn test_ragged_rows_are_total() {
    let (doc, stats) = CsvParser::from_text("a,b,c\n1\n1,2,3,4\n,\n")
        .parse_with_stats()
        .unwrap();

    assert_eq!(doc.row_count(), 3);
    assert_eq!(doc.cell(0, "a"), Some("1"));
    assert_eq!(doc.cell(0, "b"), None);
    assert_eq!(doc.cell(1, "c"), Some("3"));
    assert_eq!(doc.cell(2, "b"), Some(""));
    assert_eq!(stats.ragged_rows, 3);
    assert_eq!(stats.extra_fields, 1);
}

#[test]
fn test_crlf_input() {
    let doc = parse_str("name,age\r\nAlice,30\r\n").unwrap();
    assert_eq!(doc.columns, vec!["name", "age"]);
    assert_eq!(doc.cell(0, "age"), Some("30"));
}

#[test]
fn test_semicolon_dialect() {
    let options = ParseOptions::new().with_delimiter(b';');
    let doc = parse_str_with_options("name;price\nTea;1,50\n", options).unwrap();
    assert_eq!(doc.cell(0, "price"), Some("1,50"));
}

#[test]
fn test_non_ascii_delimiter_is_invalid_input() {
    let options = ParseOptions::new().with_delimiter(0xC3);
    let result = parse_str_with_options("\u{e9}\nx\n", options);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let options = ParseOptions::new().strict().with_quote(0xE9);
    let result = parse_str_with_options("a\n1\n", options);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_strict_mode_parses_well_formed_text() {
    let text = "name,note\nAlice,\"a, b\"\nBob\n";
    let strict = parse_str_with_options(text, ParseOptions::new().strict()).unwrap();
    assert_eq!(strict, parse_str(text).unwrap());
    assert_eq!(strict.cell(0, "note"), Some("a, b"));
    assert!(!strict.rows[1].contains("note"));
}

#[test]
fn test_leading_bom_is_dropped_once() {
    let doc = parse_str("\u{feff}\u{feff}\u{feff}\n").unwrap();
    assert_eq!(doc.columns, vec!["\u{feff}\u{feff}"]);

    let text = to_csv(&doc).unwrap();
    assert_eq!(parse_str(&text).unwrap(), doc);
}

#[test]
fn test_non_utf8_is_invalid_input() {
    let result = parse_bytes(b"name\nZ\xfcrich\n");
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_parse_file_sets_source_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.csv");
    fs::write(&path, "item,qty\nbolt,12\n").unwrap();

    let doc = parse_file(&path).unwrap();

    assert_eq!(doc.source_name.as_deref(), Some("inventory.csv"));
    assert_eq!(doc.download_name(), "inventory.csv");
    assert_eq!(doc.cell(0, "qty"), Some("12"));
}

#[test]
fn test_parse_str_has_default_download_name() {
    let doc = parse_str("a\n1\n").unwrap();
    assert_eq!(doc.download_name(), "edited.csv");
}
