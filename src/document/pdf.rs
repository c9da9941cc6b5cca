//! `lopdf`-backed document loading.
//!
//! Parsing happens on a blocking task; afterwards only the page geometry is kept, so the
//! resulting document is cheap to share across render tasks.

use crate::document::validation::validate_document_path;
use crate::document::{lookup_page, Document, DocumentLoader, PageNumber, PageSize};
use crate::error::{Result, ViewerError};
use async_trait::async_trait;
use lopdf::{Dictionary, Object, ObjectId};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Guards against cyclic `Parent` chains in malformed page trees.
const MAX_PAGE_TREE_DEPTH: usize = 32;

/// Page geometry extracted from a parsed PDF.
#[derive(Debug, Clone)]
pub struct LopdfDocument {
    path: PathBuf,
    page_sizes: Vec<PageSize>,
}

impl LopdfDocument {
    fn from_parsed(path: PathBuf, doc: &lopdf::Document) -> Result<Self> {
        let page_sizes: Vec<PageSize> = doc
            .get_pages()
            .into_values()
            .map(|page_id| page_size(doc, page_id).unwrap_or(PageSize::LETTER))
            .collect();

        if page_sizes.is_empty() {
            return Err(ViewerError::invalid_document(format!(
                "document has no pages: {}",
                path.display()
            )));
        }

        Ok(Self { path, page_sizes })
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for LopdfDocument {
    fn page_count(&self) -> u32 {
        self.page_sizes.len() as u32
    }

    fn page_size(&self, page: PageNumber) -> Result<PageSize> {
        lookup_page(&self.page_sizes, page)
    }
}

/// Resolve a page's MediaBox, walking up the page tree for inherited values.
fn page_size(doc: &lopdf::Document, page_id: ObjectId) -> Option<PageSize> {
    let mut node: &Dictionary = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(media_box) = node.get(b"MediaBox") {
            return parse_media_box(doc, media_box);
        }
        let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }

    None
}

fn parse_media_box(doc: &lopdf::Document, object: &Object) -> Option<PageSize> {
    let object = match object {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let array = object.as_array().ok()?;
    if array.len() != 4 {
        return None;
    }

    let x0 = array[0].as_float().ok()?;
    let y0 = array[1].as_float().ok()?;
    let x1 = array[2].as_float().ok()?;
    let y1 = array[3].as_float().ok()?;
    let size = PageSize {
        width_pt: (x1 - x0).abs(),
        height_pt: (y1 - y0).abs(),
    };

    (size.width_pt > 0.0 && size.height_pt > 0.0).then_some(size)
}

/// Loads documents from disk through `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfLoader;

impl LopdfLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and return the concrete document type
    pub async fn load_document(&self, path: &Path) -> Result<LopdfDocument> {
        validate_document_path(path)?;

        let owned = path.to_path_buf();
        let document = tokio::task::spawn_blocking(move || {
            let parsed = lopdf::Document::load(&owned)?;
            LopdfDocument::from_parsed(owned, &parsed)
        })
        .await
        .map_err(|e| ViewerError::other(format!("document loader task failed: {e}")))??;

        log::info!(
            "loaded {} ({} pages)",
            document.path().display(),
            document.page_count()
        );
        Ok(document)
    }
}

#[async_trait]
impl DocumentLoader for LopdfLoader {
    async fn load(&self, path: &Path) -> Result<Arc<dyn Document>> {
        Ok(Arc::new(self.load_document(path).await?))
    }
}
