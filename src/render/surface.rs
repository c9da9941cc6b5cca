//! Render capability that draws pages onto a [`Canvas`].
//!
//! `lopdf` gives us page geometry but no rasterizer, so pages are painted as blank sheets
//! framed by a border at their exact scaled size. Swapping in a rasterizing backend only
//! needs a different `paint_page`.

use crate::document::{Document, PageNumber, PageSize};
use crate::error::{Result, ViewerError};
use crate::render::canvas::Canvas;
use crate::render::PageRenderer;
use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use std::sync::Arc;

const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER: Rgba<u8> = Rgba([220, 220, 220, 255]);

/// Largest canvas a single page may take, in pixels (256 MiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

/// Canvas size for a page at `scale`: floor of the scaled viewport, at least 1x1.
pub fn viewport_size(size: PageSize, scale: f32) -> (u32, u32) {
    let width = (size.width_pt * scale).floor().max(1.0) as u32;
    let height = (size.height_pt * scale).floor().max(1.0) as u32;
    (width, height)
}

/// Paint a page frame of the given pixel size.
pub fn paint_page(width: u32, height: u32) -> RgbaImage {
    let mut frame = RgbaImage::from_pixel(width, height, PAPER);

    if width >= 4 && height >= 4 {
        for x in 0..width {
            frame.put_pixel(x, 0, BORDER);
            frame.put_pixel(x, height - 1, BORDER);
        }
        for y in 0..height {
            frame.put_pixel(0, y, BORDER);
            frame.put_pixel(width - 1, y, BORDER);
        }
    }

    frame
}

/// Draws pages of one document onto a shared canvas.
pub struct SurfaceRenderer {
    document: Arc<dyn Document>,
    canvas: Canvas,
}

impl SurfaceRenderer {
    pub fn new(document: Arc<dyn Document>, canvas: Canvas) -> Self {
        Self { document, canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

#[async_trait]
impl PageRenderer for SurfaceRenderer {
    async fn render_page(&self, page: PageNumber, scale: f32) -> Result<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewerError::render(
                page.get(),
                format!("invalid scale {scale}"),
            ));
        }

        let size = self.document.page_size(page)?;
        let (width, height) = viewport_size(size, scale);
        if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
            return Err(ViewerError::render(
                page.get(),
                format!("page would need a {width}x{height} canvas"),
            ));
        }

        let frame = tokio::task::spawn_blocking(move || paint_page(width, height))
            .await
            .map_err(|e| ViewerError::render(page.get(), format!("paint task failed: {e}")))?;

        self.canvas.present(page, frame);
        Ok(())
    }
}
