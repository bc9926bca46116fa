//! Image preprocessing for OCR.

use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Fixed-threshold grayscale binarizer applied before OCR.
///
/// Pixels are converted to luma, contrast-stretched, then snapped to
/// black or white at a fixed threshold.
pub struct ImagePreprocessor {
    /// Whether preprocessing is applied at all.
    enabled: bool,
    /// Contrast enhancement amount.
    contrast: f32,
    /// Binarization threshold.
    threshold: u8,
}

impl ImagePreprocessor {
    /// Create a preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            enabled: true,
            contrast: 1.5,
            threshold: 150,
        }
    }

    /// Create a preprocessor from configuration.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            enabled: config.enabled,
            contrast: config.contrast,
            threshold: config.threshold,
        }
    }

    /// Set the contrast enhancement amount.
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set the binarization threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Prepare an image for OCR. Returns the input unchanged when
    /// preprocessing is disabled.
    pub fn prepare(&self, image: &DynamicImage) -> DynamicImage {
        if !self.enabled {
            return image.clone();
        }
        DynamicImage::ImageLuma8(self.binarize(image))
    }

    /// Binarize an image: grayscale, contrast stretch, fixed threshold.
    pub fn binarize(&self, image: &DynamicImage) -> GrayImage {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        debug!("binarizing {}x{} image", width, height);

        let factor =
            (259.0 * (self.contrast + 255.0)) / (255.0 * (259.0 - self.contrast));

        let mut result = GrayImage::new(width, height);
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let gray = 0.299 * pixel[0] as f32
                + 0.587 * pixel[1] as f32
                + 0.114 * pixel[2] as f32;
            let stretched = factor * (gray - 128.0) + 128.0;
            let value = if stretched > self.threshold as f32 { 255 } else { 0 };
            result.put_pixel(x, y, Luma([value]));
        }

        result
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_image(r: u8, g: u8, b: u8) -> DynamicImage {
        let mut img = image::RgbImage::new(4, 4);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([r, g, b]);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_binarize_bright_pixels_go_white() {
        let preprocessor = ImagePreprocessor::new();
        let result = preprocessor.binarize(&solid_image(220, 220, 220));
        assert!(result.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_binarize_dark_pixels_go_black() {
        let preprocessor = ImagePreprocessor::new();
        let result = preprocessor.binarize(&solid_image(40, 40, 40));
        assert!(result.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let preprocessor = ImagePreprocessor::new().with_threshold(30);
        let result = preprocessor.binarize(&solid_image(40, 40, 40));
        assert!(result.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_disabled_preprocessor_passes_through() {
        let config = PreprocessConfig {
            enabled: false,
            ..Default::default()
        };
        let preprocessor = ImagePreprocessor::from_config(&config);
        let image = solid_image(40, 40, 40);
        let prepared = preprocessor.prepare(&image);
        assert_eq!(prepared.to_rgb8(), image.to_rgb8());
    }
}
