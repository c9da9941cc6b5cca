//! Single-flight render coordination.
//!
//! Navigation can ask for pages far faster than they can be drawn. The coordinator keeps at
//! most one render in flight; requests that arrive meanwhile overwrite a single pending slot,
//! and the caller that started the in-flight render keeps going until that slot is empty.
//! Intermediate pages are dropped, the last page asked for is always drawn.
//!
//! A request has two halves. [`RenderCoordinator::claim`] decides synchronously whether the
//! page starts a render or lands in the pending slot, so the order in which pages are claimed
//! is the order the caller asked for them. [`RenderCoordinator::drive`] then does the awaiting
//! and can run on any task.

use crate::document::{Document, PageNumber};
use crate::error::Result;
use crate::render::layout::FitWidth;
use crate::render::protocol::{RenderEvent, RenderFailure, RenderReport, RequestOutcome};
use crate::render::PageRenderer;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Snapshot of the coordinator's two fields.
///
/// `pending` is only ever `Some` while `in_flight` is true.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub in_flight: bool,
    pub pending: Option<PageNumber>,
}

/// Ownership of the in-flight slot, handed out by [`RenderCoordinator::claim`].
///
/// Whoever holds the claim is responsible for rendering. Dropping it without finishing
/// [`RenderCoordinator::drive`] resets the coordinator to idle and clears the pending page.
#[must_use = "a claim keeps the coordinator busy until it is driven or dropped"]
#[derive(Debug)]
pub struct RenderClaim {
    state: Arc<Mutex<RenderState>>,
    page: PageNumber,
    armed: bool,
}

impl RenderClaim {
    /// First page this claim renders
    pub fn page(&self) -> PageNumber {
        self.page
    }

    fn release(mut self) {
        self.armed = false;
    }
}

impl Drop for RenderClaim {
    fn drop(&mut self) {
        if self.armed {
            *self.state.lock() = RenderState::default();
        }
    }
}

/// Serializes calls into a [`PageRenderer`] with last-write-wins coalescing.
pub struct RenderCoordinator<R> {
    renderer: R,
    document: Arc<dyn Document>,
    layout: Mutex<FitWidth>,
    state: Arc<Mutex<RenderState>>,
    events: Option<UnboundedSender<RenderEvent>>,
}

impl<R: PageRenderer> RenderCoordinator<R> {
    pub fn new(renderer: R, document: Arc<dyn Document>, layout: FitWidth) -> Self {
        Self {
            renderer,
            document,
            layout: Mutex::new(layout),
            state: Arc::new(Mutex::new(RenderState::default())),
            events: None,
        }
    }

    /// Deliver progress events on `tx`
    pub fn with_events(mut self, tx: UnboundedSender<RenderEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn state(&self) -> RenderState {
        *self.state.lock()
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().in_flight
    }

    pub fn layout(&self) -> FitWidth {
        *self.layout.lock()
    }

    /// Change the container width used for the next render's scale
    pub fn set_container_width(&self, width: u32) {
        let mut layout = self.layout.lock();
        *layout = layout.with_container_width(width);
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    /// Ask for `page` to be rendered.
    ///
    /// When idle, renders `page` and then every page that was parked in the pending slot
    /// while it was busy, returning once the coordinator is idle again. When busy, replaces
    /// the pending page and returns [`RequestOutcome::Coalesced`] without suspending.
    pub async fn request(&self, page: PageNumber) -> RequestOutcome {
        match self.claim(page) {
            Some(claim) => RequestOutcome::Rendered(self.drive(claim).await),
            None => RequestOutcome::Coalesced,
        }
    }

    /// Claim the in-flight slot for `page`, or park `page` as pending if it's taken.
    ///
    /// Returns `None` when the page was parked; the current holder will render it.
    pub fn claim(&self, page: PageNumber) -> Option<RenderClaim> {
        let mut state = self.state.lock();
        if state.in_flight {
            if let Some(replaced) = state.pending.replace(page) {
                log::trace!("pending page {replaced} superseded by {page}");
            }
            log::debug!("render busy, page {page} queued as pending");
            return None;
        }
        state.in_flight = true;
        Some(RenderClaim {
            state: Arc::clone(&self.state),
            page,
            armed: true,
        })
    }

    /// Render the claimed page, then every pending page, until the slot is empty.
    pub async fn drive(&self, claim: RenderClaim) -> RenderReport {
        debug_assert!(Arc::ptr_eq(&claim.state, &self.state));

        let mut report = RenderReport::default();
        let mut next = Some(claim.page);

        while let Some(page) = next {
            match self.render_one(page).await {
                Ok(()) => {
                    log::debug!("rendered page {page}");
                    report.rendered.push(page);
                    self.emit(RenderEvent::Finished { page });
                }
                Err(error) => {
                    log::warn!("render of page {page} failed: {error}");
                    self.emit(RenderEvent::Failed {
                        page,
                        message: error.to_string(),
                    });
                    report.failures.push(RenderFailure { page, error });
                }
            }
            next = self.finish_or_take_pending();
        }

        claim.release();
        report
    }

    /// After a render: hand back the pending page (staying in flight) or go idle.
    fn finish_or_take_pending(&self) -> Option<PageNumber> {
        let mut state = self.state.lock();
        match state.pending.take() {
            Some(page) => Some(page),
            None => {
                state.in_flight = false;
                None
            }
        }
    }

    async fn render_one(&self, page: PageNumber) -> Result<()> {
        let size = self.document.page_size(page)?;
        let scale = self.layout.lock().scale_for(size);
        self.emit(RenderEvent::Started { page, scale });
        self.renderer.render_page(page, scale).await
    }

    fn emit(&self, event: RenderEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
