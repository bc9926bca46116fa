//! Parse command - run the extraction heuristic over recognized text.
//!
//! Useful for debugging the parser against saved OCR output without an
//! OCR engine installed.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;

use tagread_core::export;
use tagread_core::RecordExtractor;

use super::OutputFormat;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable the known-sample shortcut
    #[arg(long)]
    no_known_samples: bool,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };

    let extractor = RecordExtractor::new().with_known_samples(!args.no_known_samples);
    let records = extractor.extract(&text);

    if records.is_empty() {
        println!("{} No records extracted.", style("ℹ").blue());
        return Ok(());
    }

    match args.format.export_format() {
        Some(export_format) => {
            let content = export::render(&records, export_format)?;
            match &args.output {
                Some(path) => {
                    fs::write(path, content)?;
                    println!(
                        "{} {} records written to {}",
                        style("✓").green(),
                        records.len(),
                        path.display()
                    );
                }
                None => println!("{content}"),
            }
        }
        None => {
            super::print_table(&records);
        }
    }

    Ok(())
}
