//! csvdoc CLI - view and edit CSV files

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use csvdoc::{
    CsvParser, JsonFormat, ParseOptions, TableStyle, TabularDocument, WriteOptions,
};

#[derive(Parser)]
#[command(name = "csvdoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "View and edit CSV files: add rows, delete rows, edit cells", long_about = None)]
struct Cli {
    /// Input CSV file (shown as a table when no command is given)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CSV file as a table
    Show {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Table layout
        #[arg(long, value_enum, default_value = "plain")]
        format: TableFormat,

        #[command(flatten)]
        dialect: Dialect,
    },

    /// Convert the CSV file to JSON (columns and rows)
    Json {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        dialect: Dialect,
    },

    /// Show document information
    Info {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        dialect: Dialect,
    },

    /// Append a row, optionally filling some cells
    AddRow {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Cell to set on the new row (repeatable)
        #[arg(long = "set", value_name = "COLUMN=VALUE", value_parser = parse_assignment)]
        cells: Vec<(String, String)>,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// Delete a row by its 0-based index
    DeleteRow {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Row index (0-based, header excluded)
        #[arg(value_name = "INDEX")]
        index: usize,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// Set one cell value
    Set {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Row index (0-based, header excluded)
        #[arg(value_name = "ROW")]
        row: usize,

        /// Column name
        #[arg(value_name = "COLUMN")]
        column: String,

        /// New value
        #[arg(value_name = "VALUE")]
        value: String,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// Show version information
    Version,
}

/// CSV dialect flags shared by every command that reads a file.
#[derive(Args, Clone)]
struct Dialect {
    /// Field delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Fail on undecodable records instead of skipping them
    #[arg(long)]
    strict: bool,
}

impl Dialect {
    fn parse_options(&self) -> ParseOptions {
        let options = ParseOptions::new().with_delimiter(self.delimiter);
        if self.strict {
            options.strict()
        } else {
            options.lenient()
        }
    }
}

/// Where and how edited files are written.
#[derive(Args)]
struct SaveArgs {
    /// Output file (defaults to the input's file name, in place)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write CRLF line endings
    #[arg(long)]
    crlf: bool,

    #[command(flatten)]
    dialect: Dialect,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableFormat {
    /// Space-padded columns
    Plain,
    /// Markdown pipe table
    Markdown,
}

impl From<TableFormat> for TableStyle {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Plain => TableStyle::Plain,
            TableFormat::Markdown => TableStyle::Markdown,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {:?}", s)),
    }
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected COLUMN=VALUE, got {:?}", s))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Show {
            input,
            format,
            dialect,
        }) => cmd_show(&input, format, &dialect),
        Some(Commands::Json {
            input,
            output,
            compact,
            dialect,
        }) => cmd_json(&input, output.as_deref(), compact, &dialect),
        Some(Commands::Info { input, dialect }) => cmd_info(&input, &dialect),
        Some(Commands::AddRow { input, cells, save }) => cmd_add_row(&input, cells, &save),
        Some(Commands::DeleteRow { input, index, save }) => cmd_delete_row(&input, index, &save),
        Some(Commands::Set {
            input,
            row,
            column,
            value,
            save,
        }) => cmd_set(&input, row, column, value, &save),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: show the table if input is provided
            if let Some(input) = cli.input {
                let dialect = Dialect {
                    delimiter: b',',
                    strict: false,
                };
                cmd_show(&input, TableFormat::Plain, &dialect)
            } else {
                println!("{}", "Usage: csvdoc <FILE>".yellow());
                println!("       csvdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(input: &Path, dialect: &Dialect) -> csvdoc::Result<TabularDocument> {
    CsvParser::open_with_options(input, dialect.parse_options())?.parse()
}

fn save(doc: &TabularDocument, input: &Path, args: &SaveArgs) -> csvdoc::Result<PathBuf> {
    let path = match args.output {
        Some(ref path) => path.clone(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(doc.download_name()),
    };

    let mut options = WriteOptions::new().with_delimiter(args.dialect.delimiter);
    if args.crlf {
        options = options.crlf();
    }

    csvdoc::render::write_file(doc, &path, &options)?;
    Ok(path)
}

fn cmd_show(
    input: &Path,
    format: TableFormat,
    dialect: &Dialect,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input, dialect)?;
    print!("{}", csvdoc::render::to_table(&doc, format.into()));
    println!(
        "{}",
        format!("({} rows, {} columns)", doc.row_count(), doc.column_count()).dimmed()
    );
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    dialect: &Dialect,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(input, dialect)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = csvdoc::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, dialect: &Dialect) -> Result<(), Box<dyn std::error::Error>> {
    let (doc, stats) = CsvParser::open_with_options(input, dialect.parse_options())?
        .parse_with_stats()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Download name".bold(), doc.download_name());
    println!("{}: {}", "MIME type".bold(), csvdoc::CSV_MIME_TYPE);
    println!("{}: {}", "Rows".bold(), doc.row_count());
    println!("{}: {}", "Columns".bold(), doc.column_count());
    for (i, column) in doc.columns.iter().enumerate() {
        println!("  {} {}", format!("{:>3}.", i).dimmed(), column);
    }

    println!();
    println!("{}", "Parse Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Ragged rows".bold(), stats.ragged_rows);
    println!("{}: {}", "Dropped extra fields".bold(), stats.extra_fields);
    println!("{}: {}", "Blank lines skipped".bold(), stats.skipped_blank_lines);
    println!("{}: {}", "Records skipped".bold(), stats.skipped_records);
    println!("{}: {}", "Renamed columns".bold(), stats.renamed_columns);

    Ok(())
}

fn cmd_add_row(
    input: &Path,
    cells: Vec<(String, String)>,
    args: &SaveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(input, &args.dialect)?;

    let row = doc.add_row();
    for (column, value) in cells {
        if !doc.columns.contains(&column) {
            log::warn!("Column {:?} is not in the header and will not be written", column);
        }
        doc.set_cell(row, column, value)?;
    }

    let path = save(&doc, input, args)?;
    println!("{} row {} -> {}", "Added".green(), row, path.display());
    Ok(())
}

fn cmd_delete_row(
    input: &Path,
    index: usize,
    args: &SaveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(input, &args.dialect)?;
    doc.delete_row(index)?;

    let path = save(&doc, input, args)?;
    println!("{} row {} -> {}", "Deleted".green(), index, path.display());
    Ok(())
}

fn cmd_set(
    input: &Path,
    row: usize,
    column: String,
    value: String,
    args: &SaveArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(input, &args.dialect)?;

    if !doc.columns.contains(&column) {
        log::warn!("Column {:?} is not in the header and will not be written", column);
    }
    doc.set_cell(row, column.as_str(), value)?;

    let path = save(&doc, input, args)?;
    println!(
        "{} [{}, {}] -> {}",
        "Updated".green(),
        row,
        column,
        path.display()
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "csvdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("CSV viewing and editing tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/csvdoc".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=Carol"),
            Ok(("name".to_string(), "Carol".to_string()))
        );
        assert_eq!(
            parse_assignment("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_assignment("name").is_err());
    }

    #[test]
    fn test_edit_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("people.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "name,age\nAlice,30\nBob,25\n").unwrap();

        let args = SaveArgs {
            output: Some(output.clone()),
            crlf: false,
            dialect: Dialect {
                delimiter: b',',
                strict: false,
            },
        };

        cmd_set(&input, 1, "age".to_string(), "26".to_string(), &args).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "name,age\nAlice,30\nBob,26\n"
        );

        cmd_delete_row(&output, 0, &SaveArgs { output: None, ..args }).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "name,age\nBob,26\n");
    }

    #[test]
    fn test_delete_row_out_of_range_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("people.csv");
        fs::write(&input, "name\nAlice\n").unwrap();

        let args = SaveArgs {
            output: None,
            crlf: false,
            dialect: Dialect {
                delimiter: b',',
                strict: false,
            },
        };

        assert!(cmd_delete_row(&input, 3, &args).is_err());
        assert_eq!(fs::read_to_string(&input).unwrap(), "name\nAlice\n");
    }
}
