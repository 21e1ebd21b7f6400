//! Document rasterization
//!
//! Converts a multi-page PDF byte stream into encoded page images. The
//! concrete engine (MuPDF) sits behind the [`Rasterizer`] trait so tests can
//! wire stubs and handlers can probe availability before doing any work.

mod renderer;
mod types;

pub use renderer::MupdfRasterizer;
pub use types::{ImageFormat, RasterError, RenderedPage};

use async_trait::async_trait;

/// External rasterization capability
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Check whether the rendering engine can be used in this environment
    async fn is_available(&self) -> bool;

    /// Rasterize every page of `document` at `dpi`, encoding each page as
    /// `format`. Pages come back 1-based, in document order. Any failure
    /// aborts the whole document; there are no partial results.
    async fn rasterize(
        &self,
        document: Vec<u8>,
        dpi: u32,
        format: ImageFormat,
    ) -> Result<Vec<RenderedPage>, RasterError>;
}
