//! tablecsv - Export records from CSV or JSON as quoted CSV

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use tablecsv::config::{Direction, ExportConfig, TextEncoding};
use tablecsv::logging::init_logging;
use tablecsv::parser::{ParserFactory, Record};
use tablecsv::Table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDirection {
    Vertical,
    Horizontal,
}

impl From<CliDirection> for Direction {
    fn from(d: CliDirection) -> Self {
        match d {
            CliDirection::Vertical => Direction::Vertical,
            CliDirection::Horizontal => Direction::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliEncoding {
    Utf8,
    Ascii,
    Latin1,
}

impl From<CliEncoding> for TextEncoding {
    fn from(e: CliEncoding) -> Self {
        match e {
            CliEncoding::Utf8 => TextEncoding::Utf8,
            CliEncoding::Ascii => TextEncoding::Ascii,
            CliEncoding::Latin1 => TextEncoding::Latin1,
        }
    }
}

/// Export records from a CSV or JSON file as fully quoted CSV
#[derive(Parser, Debug)]
#[command(name = "tablecsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (.csv or .json)
    input: PathBuf,

    /// Table name; defaults to the input file stem
    #[arg(long)]
    name: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write <name>.csv into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file with export settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout direction
    #[arg(short, long, value_enum)]
    direction: Option<CliDirection>,

    /// Replacement for empty values
    #[arg(long)]
    empty_value: Option<String>,

    /// Replacement for missing values
    #[arg(long)]
    nil_value: Option<String>,

    /// Output encoding
    #[arg(long, value_enum)]
    encoding: Option<CliEncoding>,

    /// Columns to export, in order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn load_config(cli: &Cli) -> Result<ExportConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config: {}", path.display()))?
        }
        None => ExportConfig::default(),
    };

    if let Some(direction) = cli.direction {
        config.direction = direction.into();
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding.into();
    }
    if let Some(value) = &cli.empty_value {
        config.empty_value = value.clone();
    }
    if let Some(value) = &cli.nil_value {
        config.nil_value = value.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let set = ParserFactory::new()
        .parse(&cli.input)
        .with_context(|| format!("Failed to parse input: {}", cli.input.display()))?;

    let name = cli.name.clone().unwrap_or_else(|| {
        cli.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("table")
            .to_string()
    });

    let columns = if cli.columns.is_empty() {
        set.columns
    } else {
        cli.columns
    };

    let mut table: Table<Record> = Table::new(name, set.records).with_config(config);
    for column in columns {
        let key = column.clone();
        table.add_optional_field(column, move |record: &Record| {
            record.get(&key).cloned().flatten()
        });
    }

    let bytes = table.export().context("Failed to export table")?;

    if let Some(path) = cli.output {
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    } else if let Some(dir) = cli.output_dir {
        let path = dir.join(table.file_name());
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    } else {
        let mut stdout = std::io::stdout();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
    }

    Ok(())
}
