//! Rasterization types

use serde::Serialize;
use thiserror::Error;

/// Output encoding for rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Parse a caller-supplied encoding name, case-insensitively.
    /// Returns `None` for anything outside the supported set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpeg" | "jpg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }
}

/// One rasterized page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-based page number, matching document order
    pub number: usize,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Encoded image bytes in `format`
    pub data: Vec<u8>,
}

/// Rasterization error types
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PDF rasterizer not available: {0}")]
    Unavailable(String),

    #[error("Failed to open document: {0}")]
    Open(String),

    #[error("Failed to render page: {0}")]
    Render(String),

    #[error("Failed to encode page image: {0}")]
    Encode(String),
}
