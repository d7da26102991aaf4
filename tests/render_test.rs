//! Integration tests for writing documents.

use std::fs;

use csvdoc::render::{to_json, to_table, write_file};
use csvdoc::{parse_str, Csvdoc, JsonFormat, TableStyle, TabularDocument, WriteOptions};

#[test]
fn test_write_file_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.csv");

    let mut doc = parse_str("name,note\nAlice,\"hello, world\"\n").unwrap();
    let row = doc.add_row();
    doc.set_cell(row, "name", "Bob").unwrap();
    doc.set_cell(row, "note", "says \"hi\"").unwrap();

    write_file(&doc, &path, &WriteOptions::default()).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "name,note\nAlice,\"hello, world\"\nBob,\"says \"\"hi\"\"\"\n"
    );

    let reloaded = csvdoc::parse_file(&path).unwrap();
    assert_eq!(reloaded.rows, doc.rows);
}

#[test]
fn test_builder_save_uses_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let loaded = Csvdoc::new().crlf().parse_str("a,b\n1,2\n").unwrap();
    loaded.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\r\n1,2\r\n");
}

#[test]
fn test_json_view_for_front_ends() {
    let doc = parse_str("name,age\nAlice,30\n").unwrap();
    let json = to_json(&doc, JsonFormat::Compact).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["columns"][1], "age");
    assert_eq!(value["rows"][0]["name"], "Alice");
    assert!(value.get("source_name").is_none());
}

#[test]
fn test_table_view_matches_effective_columns() {
    let mut doc = TabularDocument::new();
    doc.add_row();
    doc.set_cell(0, "name", "Carol").unwrap();

    let table = to_table(&doc, TableStyle::Markdown);
    assert_eq!(table, "| name |\n| --- |\n| Carol |\n");
}
