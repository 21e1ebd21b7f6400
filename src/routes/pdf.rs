//! PDF processing endpoints
//!
//! - `/pdf-to-images`: rasterize every page and return base64 payloads
//! - `/pdf-to-text`: rasterize then OCR each page, isolating per-page
//!   recognition failures inside the response body

use axum::{extract::Multipart, extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::ocr::RecognizeOptions;
use crate::raster::{ImageFormat, RasterError, RenderedPage};
use crate::state::AppState;

use super::upload::{self, UploadedFile};

/// Response for /pdf-to-images
#[derive(Serialize)]
pub struct PdfToImagesResponse {
    pub success: bool,
    pub total_pages: usize,
    pub images: Vec<PageImage>,
}

/// One rendered page, base64-encoded for JSON transport
#[derive(Serialize)]
pub struct PageImage {
    pub page: usize,
    pub format: ImageFormat,
    pub data: String,
    pub size: ImageSize,
}

#[derive(Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Response for /pdf-to-text
#[derive(Serialize)]
pub struct PdfToTextResponse {
    pub success: bool,
    pub total_pages: usize,
    pub combined_text: String,
    pub total_words: usize,
    pub pages: Vec<PageOutcome>,
}

/// Per-page result of the combined operation. A failed page keeps its slot
/// (empty text plus the error) so the list always has one entry per page,
/// in page order.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PageOutcome {
    Recognized {
        page: usize,
        text: String,
        word_count: usize,
    },
    Failed {
        page: usize,
        text: String,
        error: String,
    },
}

impl PageOutcome {
    fn recognized(page: usize, text: String) -> Self {
        let word_count = text.split_whitespace().count();
        PageOutcome::Recognized {
            page,
            text,
            word_count,
        }
    }

    fn failed(page: usize, error: String) -> Self {
        PageOutcome::Failed {
            page,
            text: String::new(),
            error,
        }
    }
}

/// Rasterize an uploaded PDF into per-page images
///
/// Multipart fields: `file` (required), `resolution` (DPI, default 200),
/// `encoding` (png/jpeg/webp, default png).
pub async fn pdf_to_images(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PdfToImagesResponse>> {
    let mut form = upload::read_form(multipart).await?;
    let file = form.require_file()?;
    require_pdf(&file)?;

    let resolution = parse_resolution(form.text("resolution"), 200)?;
    let format = match form.text("encoding") {
        None => ImageFormat::Png,
        Some(raw) => ImageFormat::parse(raw).ok_or_else(|| {
            AppError::InvalidParameter(format!("unsupported image encoding '{}'", raw))
        })?,
    };

    let pages = rasterize_upload(&state, file, resolution, format).await?;

    let total_pages = pages.len();
    let images = pages
        .into_iter()
        .map(|page| PageImage {
            page: page.number,
            format: page.format,
            data: BASE64.encode(&page.data),
            size: ImageSize {
                width: page.width,
                height: page.height,
            },
        })
        .collect();

    Ok(Json(PdfToImagesResponse {
        success: true,
        total_pages,
        images,
    }))
}

/// Rasterize an uploaded PDF, then OCR every page
///
/// Multipart fields: `file` (required), `language` (default from config),
/// `resolution` (DPI, default 300).
///
/// Rasterization is all-or-nothing: a failure there aborts the request.
/// Recognition is attempted per page and a failure on one page never stops
/// the remaining pages; the failed slot records the error inline instead.
pub async fn pdf_to_text(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PdfToTextResponse>> {
    let mut form = upload::read_form(multipart).await?;
    let file = form.require_file()?;
    require_pdf(&file)?;

    let language = form
        .text("language")
        .unwrap_or(&state.config().ocr.default_language)
        .to_string();
    let resolution = parse_resolution(form.text("resolution"), 300)?;

    let pages = rasterize_upload(&state, file, resolution, ImageFormat::Png).await?;
    let total_pages = pages.len();

    let mut outcomes = Vec::with_capacity(total_pages);
    for page in pages {
        let number = page.number;
        let result = state
            .recognizer()
            .recognize(page.data, RecognizeOptions::text_only(language.clone()))
            .await;

        match result {
            Ok(recognition) => outcomes.push(PageOutcome::recognized(number, recognition.text)),
            Err(e) => {
                tracing::warn!("Recognition failed on page {}: {}", number, e);
                outcomes.push(PageOutcome::failed(number, e.to_string()));
            }
        }
    }

    let (combined_text, total_words) = combine_pages(&outcomes);

    tracing::info!(
        "Processed {} pages ({} words, {} failed)",
        total_pages,
        total_words,
        outcomes
            .iter()
            .filter(|o| matches!(o, PageOutcome::Failed { .. }))
            .count()
    );

    Ok(Json(PdfToTextResponse {
        success: true,
        total_pages,
        combined_text,
        total_words,
        pages: outcomes,
    }))
}

fn require_pdf(file: &UploadedFile) -> Result<()> {
    if !upload::has_pdf_extension(&file.filename) {
        return Err(AppError::NotAPdf);
    }
    Ok(())
}

async fn rasterize_upload(
    state: &AppState,
    file: UploadedFile,
    resolution: u32,
    format: ImageFormat,
) -> Result<Vec<RenderedPage>> {
    if !state.rasterizer().is_available().await {
        return Err(RasterError::Unavailable(
            "PDF rendering engine is not available".to_string(),
        )
        .into());
    }

    tracing::debug!(
        "Rasterizing '{}' at {} dpi ({} bytes)",
        file.filename,
        resolution,
        file.data.len()
    );

    let pages = state
        .rasterizer()
        .rasterize(file.data, resolution, format)
        .await?;

    Ok(pages)
}

fn parse_resolution(raw: Option<&str>, default: u32) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(dpi) if dpi > 0 => Ok(dpi),
        _ => Err(AppError::InvalidParameter(format!(
            "resolution must be a positive integer, got '{}'",
            raw
        ))),
    }
}

/// Join the successful page texts with a blank line and count the words of
/// the concatenation. Failed pages contribute nothing.
fn combine_pages(outcomes: &[PageOutcome]) -> (String, usize) {
    let texts: Vec<&str> = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            PageOutcome::Recognized { text, .. } => Some(text.as_str()),
            PageOutcome::Failed { .. } => None,
        })
        .collect();

    let combined = texts.join("\n\n");
    let total_words = combined.split_whitespace().count();
    (combined, total_words)
}
