//! Shared pixel surface that holds the most recently rendered page.

use crate::document::PageNumber;
use crate::error::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// Color of an empty canvas.
pub const BACKGROUND: Rgba<u8> = Rgba([245, 245, 245, 255]);

#[derive(Debug)]
struct Surface {
    pixels: RgbaImage,
    page: Option<PageNumber>,
}

/// RGBA canvas shared between the render capability and its readers.
///
/// Clones refer to the same pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    inner: Arc<Mutex<Surface>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Surface {
                pixels: RgbaImage::from_pixel(width.max(1), height.max(1), BACKGROUND),
                page: None,
            })),
        }
    }

    /// Current (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.lock().pixels.dimensions()
    }

    /// Page currently shown, if any render has completed
    pub fn page(&self) -> Option<PageNumber> {
        self.inner.lock().page
    }

    /// Swap a finished frame in
    pub fn present(&self, page: PageNumber, frame: RgbaImage) {
        let mut surface = self.inner.lock();
        surface.pixels = frame;
        surface.page = Some(page);
    }

    /// Copy of the current pixels
    pub fn snapshot(&self) -> RgbaImage {
        self.inner.lock().pixels.clone()
    }

    /// Write the current pixels as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let snapshot = self.snapshot();
        snapshot.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
