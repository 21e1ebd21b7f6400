//! Text recognition
//!
//! Converts a single image into recognized text with optional word-level
//! confidence and bounding boxes. The engine (Tesseract via leptess) sits
//! behind the [`Recognizer`] trait with an availability probe, so a missing
//! installation degrades to 503 instead of crashing requests.

mod provider;
mod types;

pub use provider::TesseractRecognizer;
pub use types::{BoundingBox, OcrError, Recognition, RecognizeOptions, Word};

use async_trait::async_trait;

/// External text-recognition capability
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Check whether the engine and its language data are usable
    async fn is_available(&self) -> bool;

    /// Recognize text in an encoded image (PNG, JPEG, ...)
    async fn recognize(
        &self,
        image: Vec<u8>,
        options: RecognizeOptions,
    ) -> Result<Recognition, OcrError>;
}
