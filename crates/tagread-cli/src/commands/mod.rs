//! CLI subcommands.

pub mod config;
pub mod parse;
pub mod scan;

use clap::ValueEnum;
use console::style;

use tagread_core::{ExportFormat, Record};

/// Output format shared by the scan and parse commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// CSV table (Number,Name,Organization)
    Csv,
    /// JSON array with 1-based numbering
    Json,
    /// Human-readable table on stdout
    Text,
}

impl OutputFormat {
    /// The core export format, if this is a file export format.
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Csv => Some(ExportFormat::Csv),
            Self::Json => Some(ExportFormat::Json),
            Self::Text => None,
        }
    }
}

/// Print records as a numbered table.
pub fn print_table(records: &[Record]) {
    println!(
        "{:>4}  {:<30} {}",
        style("#").bold(),
        style("Name").bold(),
        style("Organization").bold()
    );
    for (i, record) in records.iter().enumerate() {
        println!("{:>4}  {:<30} {}", i + 1, record.name, record.organization);
    }
}
