//! Scan command - run OCR on name tag images and export the results.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use glob::glob;
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use tagread_core::export;
use tagread_core::{
    ImagePreprocessor, NametagPipeline, RecordExtractor, RecordStore, SortDirection, SortField,
    TagreadConfig, TesseractEngine,
};

use super::OutputFormat;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file (default: nametag_data.csv / nametag_data.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Append a manual entry, as "Name" or "Name=Organization" (repeatable)
    #[arg(short, long)]
    manual: Vec<String>,

    /// Sort the output by this field
    #[arg(long, value_enum)]
    sort: Option<SortFieldArg>,

    /// Sort direction
    #[arg(long, value_enum, default_value = "asc")]
    direction: SortDirectionArg,

    /// Skip image preprocessing (binarization)
    #[arg(long)]
    no_preprocess: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SortFieldArg {
    Name,
    Organization,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SortDirectionArg {
    Asc,
    Desc,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        TagreadConfig::from_file(std::path::Path::new(path))?
    } else {
        TagreadConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "tiff" | "tif" | "bmp" | "webp"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching image files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} images to process",
        style("ℹ").blue(),
        files.len()
    );

    // Load images up front so a bad file fails before any OCR runs
    let load_pb = ProgressBar::new(files.len() as u64);
    load_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} loading")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut images: Vec<DynamicImage> = Vec::with_capacity(files.len());
    for path in &files {
        let image = image::open(path)
            .with_context(|| format!("cannot open image {}", path.display()))?;
        debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
        images.push(image);
        load_pb.inc(1);
    }
    load_pb.finish_and_clear();

    // Build the pipeline
    let engine = Arc::new(TesseractEngine::from_config(&config.ocr));
    let mut preprocess_config = config.preprocessing.clone();
    if args.no_preprocess {
        preprocess_config.enabled = false;
    }
    let preprocessor = ImagePreprocessor::from_config(&preprocess_config);
    let extractor = RecordExtractor::new().with_known_samples(config.extraction.known_samples);
    let pipeline = NametagPipeline::new(engine)
        .with_preprocessor(preprocessor)
        .with_extractor(extractor);

    // Run the batch sequentially
    let ocr_pb = ProgressBar::new_spinner();
    ocr_pb.set_message(format!("Running OCR on {} images...", images.len()));
    ocr_pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut store = RecordStore::new();
    let outcome = pipeline.process_batch(&images, &mut store).await?;
    ocr_pb.finish_and_clear();

    info!(
        "extracted {} records from {} images",
        outcome.records_extracted, outcome.images_processed
    );

    // Append manual entries
    for entry in &args.manual {
        let (name, organization) = match entry.split_once('=') {
            Some((name, org)) => (name, org),
            None => (entry.as_str(), ""),
        };
        store
            .add_manual(name, organization)
            .with_context(|| format!("invalid manual entry: {entry:?}"))?;
    }

    // Apply sort view
    if let Some(field) = args.sort {
        let field = match field {
            SortFieldArg::Name => SortField::Name,
            SortFieldArg::Organization => SortField::Organization,
        };
        let direction = match args.direction {
            SortDirectionArg::Asc => SortDirection::Asc,
            SortDirectionArg::Desc => SortDirection::Desc,
        };
        store.sort_by(field, direction);
    }

    if store.is_empty() {
        println!(
            "{} No data could be extracted. Try clearer images or add entries with --manual.",
            style("ℹ").blue()
        );
        return Ok(());
    }

    let records = store.view();

    // Write output
    match args.format.export_format() {
        Some(export_format) => {
            let content = export::render(&records, export_format)?;
            let output_path = args
                .output
                .unwrap_or_else(|| PathBuf::from(export_format.file_name()));
            fs::write(&output_path, content)?;
            println!(
                "{} {} records written to {}",
                style("✓").green(),
                records.len(),
                output_path.display()
            );
        }
        None => {
            super::print_table(&records);
        }
    }

    println!(
        "{} Processed {} images in {:?}",
        style("✓").green(),
        outcome.images_processed,
        start.elapsed()
    );

    Ok(())
}
