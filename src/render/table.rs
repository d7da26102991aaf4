//! Text table view of a document, for terminals and Markdown.

use super::TableStyle;
use crate::model::TabularDocument;

/// Render a document as a text table.
///
/// Columns follow [`TabularDocument::effective_columns`]. Line breaks inside
/// cells are flattened to spaces. A document without columns renders as an
/// empty string.
pub fn to_table(doc: &TabularDocument, style: TableStyle) -> String {
    let columns = doc.effective_columns();
    if columns.is_empty() {
        return String::new();
    }

    let header: Vec<String> = columns.iter().map(|c| cell_text(c, style)).collect();
    let body: Vec<Vec<String>> = doc
        .rows
        .iter()
        .map(|row| row.values_for(&columns).map(|v| cell_text(v, style)).collect())
        .collect();

    match style {
        TableStyle::Markdown => render_markdown(&header, &body),
        TableStyle::Plain => render_plain(&header, &body),
    }
}

fn cell_text(value: &str, style: TableStyle) -> String {
    let flat = value.replace("\r\n", " ").replace(['\n', '\r'], " ");
    match style {
        TableStyle::Markdown => flat.replace('|', "\\|"),
        TableStyle::Plain => flat,
    }
}

fn render_markdown(header: &[String], body: &[Vec<String>]) -> String {
    let mut output = String::new();

    push_markdown_row(&mut output, header);
    output.push('|');
    for _ in header {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in body {
        push_markdown_row(&mut output, row);
    }

    output
}

fn push_markdown_row(output: &mut String, cells: &[String]) {
    output.push('|');
    for cell in cells {
        output.push_str(&format!(" {} |", cell));
    }
    output.push('\n');
}

fn render_plain(header: &[String], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_plain_row(&mut output, header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_plain_row(&mut output, &rule, &widths);
    for row in body {
        push_plain_row(&mut output, row, &widths);
    }

    output
}

fn push_plain_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn people() -> TabularDocument {
        let mut doc = TabularDocument::with_columns(["name", "note"]);
        doc.rows.push(Record::from_pairs([("name", "Alice"), ("note", "a|b")]));
        doc.rows.push(Record::from_pairs([("name", "Bob")]));
        doc
    }

    #[test]
    fn test_markdown_table() {
        let table = to_table(&people(), TableStyle::Markdown);
        assert_eq!(
            table,
            "| name | note |\n| --- | --- |\n| Alice | a\\|b |\n| Bob |  |\n"
        );
    }

    #[test]
    fn test_plain_table_alignment() {
        let table = to_table(&people(), TableStyle::Plain);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "name   note");
        assert_eq!(lines[1], "-----  ----");
        assert_eq!(lines[2], "Alice  a|b");
        assert_eq!(lines[3], "Bob");
    }

    #[test]
    fn test_newlines_flattened() {
        let mut doc = TabularDocument::with_columns(["note"]);
        doc.rows.push(Record::from_pairs([("note", "two\nlines")]));
        let table = to_table(&doc, TableStyle::Markdown);
        assert!(table.contains("| two lines |"));
    }

    #[test]
    fn test_empty_document() {
        assert!(to_table(&TabularDocument::new(), TableStyle::Plain).is_empty());
    }
}
