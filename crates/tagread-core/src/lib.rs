//! Core library for name tag OCR processing.
//!
//! This crate provides:
//! - OCR text cleaning and record extraction (name/organization pairing
//!   with progressive fallback strategies)
//! - A source-tagged record store with selective clearing, editing, and
//!   sorting
//! - CSV/JSON export of the record table
//! - The OCR engine boundary (image preprocessing plus a tesseract-backed
//!   engine) and the sequential batch pipeline

pub mod error;
pub mod export;
pub mod models;
pub mod ocr;
pub mod parse;
pub mod pipeline;
pub mod store;

pub use error::{ExportError, OcrError, Result, StoreError, TagreadError};
pub use export::ExportFormat;
pub use models::config::TagreadConfig;
pub use models::record::{Record, RecordSource};
pub use ocr::{ImagePreprocessor, OcrEngine, OcrOutput, TesseractEngine};
pub use parse::{clean_lines, RecordExtractor};
pub use pipeline::{BatchOutcome, NametagPipeline};
pub use store::{RecordField, RecordStore, SortDirection, SortField};
