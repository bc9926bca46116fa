//! Sequential OCR batch pipeline.
//!
//! Images are processed strictly one at a time: image N+1's OCR call is
//! not issued until image N's records have been merged into the store.
//! A recognition failure aborts the remaining batch; records committed
//! for earlier images stay in place. There is no cancellation and no
//! timeout on an in-flight OCR call.

use std::sync::Arc;
use std::time::Instant;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::Result;
use crate::ocr::{ImagePreprocessor, OcrEngine};
use crate::parse::RecordExtractor;
use crate::store::RecordStore;

/// Summary of one batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Number of images processed.
    pub images_processed: usize,
    /// Number of records extracted across the batch.
    pub records_extracted: usize,
    /// Total processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Drives preprocess → OCR → extract → commit for a batch of images.
pub struct NametagPipeline {
    engine: Arc<dyn OcrEngine>,
    preprocessor: ImagePreprocessor,
    extractor: RecordExtractor,
}

impl NametagPipeline {
    /// Create a pipeline around an OCR engine with default preprocessing
    /// and extraction settings.
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self {
            engine,
            preprocessor: ImagePreprocessor::new(),
            extractor: RecordExtractor::new(),
        }
    }

    /// Replace the image preprocessor.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Replace the record extractor.
    pub fn with_extractor(mut self, extractor: RecordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Process images sequentially, committing into `store`.
    ///
    /// The accumulated batch is re-committed after each image, so the
    /// previous session's OCR records are replaced at the first commit
    /// and a mid-batch failure leaves earlier images' records in the
    /// store. Manual records always survive. An empty image list leaves
    /// the store untouched.
    pub async fn process_batch(
        &self,
        images: &[DynamicImage],
        store: &mut RecordStore,
    ) -> Result<BatchOutcome> {
        let start = Instant::now();
        let mut extracted = Vec::new();

        for (index, image) in images.iter().enumerate() {
            debug!("processing image {} of {}", index + 1, images.len());

            let prepared = self.preprocessor.prepare(image);
            let output = self.engine.recognize(&prepared).await?;
            let records = self.extractor.extract(&output.text);
            debug!("image {} yielded {} records", index + 1, records.len());

            extracted.extend(records);
            store.append_ocr_batch(extracted.clone());
        }

        let outcome = BatchOutcome {
            images_processed: images.len(),
            records_extracted: extracted.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "batch complete: {} images, {} records in {}ms",
            outcome.images_processed, outcome.records_extracted, outcome.processing_time_ms
        );
        Ok(outcome)
    }
}
