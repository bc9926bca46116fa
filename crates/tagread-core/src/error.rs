//! Error types for the tagread-core library.

use thiserror::Error;

/// Main error type for the tagread library.
#[derive(Error, Debug)]
pub enum TagreadError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the OCR collaborator.
///
/// Any of these aborts the remaining image batch; none of them is fatal
/// to the caller's session.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR engine failed to recognize the image.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The engine returned a result without recognized text.
    #[error("OCR engine returned malformed output")]
    MalformedOutput,

    /// The engine binary could not be started.
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),
}

/// Errors from record store operations.
///
/// These are local and recoverable; a failed operation leaves the store
/// untouched.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Manual entry submitted with an empty name.
    #[error("name must not be empty")]
    EmptyName,

    /// Edit or delete referenced an out-of-range index.
    #[error("record index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },

    /// Field name does not refer to an editable field.
    #[error("unknown record field: {0}")]
    UnknownField(String),
}

/// Errors from export formatting.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export requested with zero records.
    #[error("no records to export")]
    NoRecords,

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the tagread library.
pub type Result<T> = std::result::Result<T, TagreadError>;
