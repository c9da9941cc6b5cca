//! Document abstraction over the external PDF library.
//!
//! The viewer never decodes PDF content itself. It only needs to know how many pages a
//! document has and how large each page is, so it can pick a scale and size the canvas.

pub mod pdf;
pub mod validation;

use crate::error::{Result, ViewerError};
use async_trait::async_trait;
use std::fmt;
use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;

pub use pdf::{LopdfDocument, LopdfLoader};
pub use validation::validate_document_path;

/// 1-based index into a document's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page of every document.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index for page lookups.
    pub fn index(self) -> usize {
        (self.get() - 1) as usize
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unscaled page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// US Letter, used when a page carries no usable MediaBox.
    pub const LETTER: PageSize = PageSize {
        width_pt: 612.0,
        height_pt: 792.0,
    };
}

/// A loaded document: page count plus per-page geometry.
pub trait Document: Send + Sync {
    /// Total number of pages (always at least one)
    fn page_count(&self) -> u32;

    /// Geometry of a single page
    ///
    /// # Errors
    /// * `PageOutOfRange` if `page` is beyond `page_count`
    fn page_size(&self, page: PageNumber) -> Result<PageSize>;
}

/// Loads documents from disk.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<Arc<dyn Document>>;
}

/// Shared page-size lookup used by the concrete documents.
pub(crate) fn lookup_page(sizes: &[PageSize], page: PageNumber) -> Result<PageSize> {
    sizes
        .get(page.index())
        .copied()
        .ok_or(ViewerError::PageOutOfRange {
            page: page.get(),
            page_count: sizes.len() as u32,
        })
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! In-memory documents for tests.

    use super::*;

    /// Document with a fixed list of page sizes.
    pub struct StaticDocument {
        pub sizes: Vec<PageSize>,
    }

    impl StaticDocument {
        pub fn uniform(pages: u32, size: PageSize) -> Self {
            Self {
                sizes: vec![size; pages as usize],
            }
        }
    }

    impl Document for StaticDocument {
        fn page_count(&self) -> u32 {
            self.sizes.len() as u32
        }

        fn page_size(&self, page: PageNumber) -> Result<PageSize> {
            lookup_page(&self.sizes, page)
        }
    }
}
