//! OCR types

use serde::Serialize;
use thiserror::Error;

/// Options for a single recognition call
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    /// Tesseract language code (e.g. "eng", "deu", "eng+fra")
    pub language: String,
    /// Optional engine option string, e.g. "--psm 6 -c tessedit_char_whitelist=0123456789"
    pub config: Option<String>,
    /// Collect per-word confidence and bounding boxes. Skipped for bulk
    /// page-text extraction where only the plain text is used.
    pub word_details: bool,
}

impl RecognizeOptions {
    pub fn text_only(language: String) -> Self {
        Self {
            language,
            config: None,
            word_details: false,
        }
    }
}

/// Recognition result for one image
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Full recognized text, trimmed
    pub text: String,
    /// Word-level results; empty unless `word_details` was requested
    pub words: Vec<Word>,
}

/// Single recognized word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub text: String,
    /// Confidence score (0-100)
    pub confidence: f32,
    pub bbox: BoundingBox,
}

/// Word bounding box in pixel coordinates of the input image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// OCR error types
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine not available: {0}")]
    Unavailable(String),

    #[error("Failed to initialize OCR engine: {0}")]
    Init(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),
}
