//! OCR engine wrapping the `tesseract` CLI tool.

use std::path::Path;

use async_trait::async_trait;
use image::DynamicImage;
use tokio::process::Command;
use tracing::debug;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{OcrEngine, OcrOutput};

/// OCR engine that shells out to the `tesseract` binary.
pub struct TesseractEngine {
    binary: String,
    language: String,
    char_whitelist: String,
}

impl TesseractEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::from_config(&OcrConfig::default())
    }

    /// Create an engine from configuration.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            language: config.language.clone(),
            char_whitelist: config.char_whitelist.clone(),
        }
    }

    fn write_input(&self, image: &DynamicImage, path: &Path) -> Result<(), OcrError> {
        image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| OcrError::Recognition(format!("cannot write input image: {e}")))
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, image: &DynamicImage) -> Result<OcrOutput, OcrError> {
        // Tesseract works on files, so stage the image in a tempdir.
        let tmpdir = tempfile::TempDir::with_prefix("tagread")
            .map_err(|e| OcrError::Recognition(format!("cannot create temp dir: {e}")))?;
        let input_path = tmpdir.path().join("input.png");
        let output_base = tmpdir.path().join("output");
        let output_path = tmpdir.path().join("output.txt");

        self.write_input(image, &input_path)?;

        let mut command = Command::new(&self.binary);
        command
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(&self.language);
        if !self.char_whitelist.is_empty() {
            command
                .arg("-c")
                .arg(format!("tessedit_char_whitelist={}", self.char_whitelist));
        }

        let output = command
            .output()
            .await
            .map_err(|e| OcrError::EngineUnavailable(format!("{}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        // A successful run without an output file is malformed output,
        // equivalent to a recognition failure.
        let text = tokio::fs::read_to_string(&output_path)
            .await
            .map_err(|_| OcrError::MalformedOutput)?;

        debug!("recognized {} bytes of text", text.len());
        Ok(OcrOutput { text })
    }
}
