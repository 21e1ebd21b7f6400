//! MuPDF-backed rasterizer
//!
//! Opens the document fresh per request and renders each page to an RGBA
//! pixmap, then encodes it with the `image` crate. MuPDF work is CPU-bound
//! and not async-friendly, so the whole document runs under
//! `tokio::task::spawn_blocking`.

use std::io::Cursor;

use async_trait::async_trait;
use image::DynamicImage;
use mupdf::{Colorspace, Document, Matrix};

use super::types::{ImageFormat, RasterError, RenderedPage};
use super::Rasterizer;

/// PDF points per inch; DPI converts to a scale factor against this
const POINTS_PER_INCH: f32 = 72.0;

/// Rasterizer backed by the statically linked MuPDF library
pub struct MupdfRasterizer;

#[async_trait]
impl Rasterizer for MupdfRasterizer {
    async fn is_available(&self) -> bool {
        // MuPDF is linked into the binary; the probe exists so the
        // capability contract stays uniform across providers.
        true
    }

    async fn rasterize(
        &self,
        document: Vec<u8>,
        dpi: u32,
        format: ImageFormat,
    ) -> Result<Vec<RenderedPage>, RasterError> {
        tokio::task::spawn_blocking(move || rasterize_document(&document, dpi, format))
            .await
            .map_err(|e| RasterError::Render(format!("Task join error: {}", e)))?
    }
}

fn rasterize_document(
    data: &[u8],
    dpi: u32,
    format: ImageFormat,
) -> Result<Vec<RenderedPage>, RasterError> {
    let doc = Document::from_bytes(data, "application/pdf")
        .map_err(|e| RasterError::Open(e.to_string()))?;
    let page_count = doc
        .page_count()
        .map_err(|e| RasterError::Open(e.to_string()))? as usize;

    let scale = dpi as f32 / POINTS_PER_INCH;
    let matrix = Matrix::new_scale(scale, scale);
    let colorspace = Colorspace::device_rgb();

    let mut pages = Vec::with_capacity(page_count);
    for index in 0..page_count {
        let number = index + 1;
        let page = doc
            .load_page(index as i32)
            .map_err(|e| RasterError::Render(format!("page {}: {}", number, e)))?;
        let pixmap = page
            .to_pixmap(&matrix, &colorspace, true, true)
            .map_err(|e| RasterError::Render(format!("page {}: {}", number, e)))?;

        let (data, width, height) = encode_pixmap(&pixmap, format)?;
        pages.push(RenderedPage {
            number,
            width,
            height,
            format,
            data,
        });
    }

    Ok(pages)
}

fn encode_pixmap(
    pixmap: &mupdf::Pixmap,
    format: ImageFormat,
) -> Result<(Vec<u8>, u32, u32), RasterError> {
    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let samples = pixmap.samples();
    let n = pixmap.n() as usize;

    // MuPDF hands back interleaved samples with n channels; normalize to RGBA
    let mut rgba_buffer = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * n;
            let r = samples.get(offset).copied().unwrap_or(0);
            let g = samples.get(offset + 1).copied().unwrap_or(0);
            let b = samples.get(offset + 2).copied().unwrap_or(0);
            let a = if n >= 4 {
                samples.get(offset + 3).copied().unwrap_or(255)
            } else {
                255
            };
            rgba_buffer.extend_from_slice(&[r, g, b, a]);
        }
    }

    let img = image::RgbaImage::from_raw(width, height, rgba_buffer)
        .ok_or_else(|| RasterError::Encode("Failed to create image buffer".to_string()))?;
    let dynamic_img = DynamicImage::ImageRgba8(img);

    let target = match format {
        ImageFormat::Png => image::ImageFormat::Png,
        // JPEG has no alpha channel
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Webp => image::ImageFormat::WebP,
    };
    let dynamic_img = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(dynamic_img.to_rgb8()),
        _ => dynamic_img,
    };

    let mut output = Vec::new();
    dynamic_img
        .write_to(&mut Cursor::new(&mut output), target)
        .map_err(|e| RasterError::Encode(e.to_string()))?;

    Ok((output, width, height))
}
