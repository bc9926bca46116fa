//! OCR collaborator boundary.
//!
//! The OCR engine is a black box: given an image, it returns a text
//! blob. Everything this crate knows about recognition quality lives in
//! the parsing heuristics, not here.

mod preprocessing;
mod tesseract;

pub use preprocessing::ImagePreprocessor;
pub use tesseract::TesseractEngine;

use async_trait::async_trait;
use image::DynamicImage;

use crate::error::OcrError;

/// Recognized text for one image.
#[derive(Debug, Clone)]
pub struct OcrOutput {
    /// The raw recognized text blob.
    pub text: String,
}

/// An OCR engine. Implementations are awaited one image at a time; no
/// cancellation or timeout is imposed on a running call.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an image.
    async fn recognize(&self, image: &DynamicImage) -> Result<OcrOutput, OcrError>;
}
