//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use lopdf::{dictionary, Object};
use parking_lot::Mutex;
use pdfglance::document::{Document, PageNumber, PageSize};
use pdfglance::render::PageRenderer;
use pdfglance::{Result, ViewerError};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::time::{timeout, Duration};

const TIMEOUT_MS: u64 = 500;

pub fn page(n: u32) -> PageNumber {
    PageNumber::new(n).expect("non-zero page")
}

/// Document where every page has the same size.
pub struct UniformDocument {
    pub pages: u32,
    pub size: PageSize,
}

impl UniformDocument {
    pub fn letter(pages: u32) -> Arc<dyn Document> {
        Arc::new(Self {
            pages,
            size: PageSize::LETTER,
        })
    }
}

impl Document for UniformDocument {
    fn page_count(&self) -> u32 {
        self.pages
    }

    fn page_size(&self, page: PageNumber) -> Result<PageSize> {
        if page.get() > self.pages {
            return Err(ViewerError::PageOutOfRange {
                page: page.get(),
                page_count: self.pages,
            });
        }
        Ok(self.size)
    }
}

/// Render capability that blocks every render until the test releases it.
pub struct GatedRenderer {
    calls: Mutex<Vec<u32>>,
    started: mpsc::UnboundedSender<u32>,
    gate: Semaphore,
}

impl GatedRenderer {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<u32>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        let renderer = Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            started,
            gate: Semaphore::new(0),
        });
        (renderer, started_rx)
    }

    /// Let one render (current or future) complete
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PageRenderer for GatedRenderer {
    async fn render_page(&self, page: PageNumber, _scale: f32) -> Result<()> {
        self.calls.lock().push(page.get());
        let _ = self.started.send(page.get());
        self.gate
            .acquire()
            .await
            .map_err(|_| ViewerError::render(page.get(), "gate closed"))?
            .forget();
        Ok(())
    }
}

/// Wait for the renderer to report that a render started.
pub async fn next_started(rx: &mut mpsc::UnboundedReceiver<u32>) -> u32 {
    timeout(Duration::from_millis(TIMEOUT_MS), rx.recv())
        .await
        .expect("render start timed out")
        .expect("renderer channel closed unexpectedly")
}

/// Write a minimal PDF whose pages carry the given MediaBox sizes.
pub fn write_pdf(path: &Path, pages: &[(i64, i64)]) {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = pages
        .iter()
        .map(|&(width, height)| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("write fixture pdf");
}
