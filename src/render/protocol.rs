//! Messages exchanged between the render coordinator and the viewer loop.

use crate::document::PageNumber;
use crate::error::ViewerError;

/// Progress notifications emitted by the coordinator while it drives renders.
#[derive(Debug)]
pub enum RenderEvent {
    /// A render for `page` was handed to the render capability.
    Started { page: PageNumber, scale: f32 },
    /// The canvas now shows `page`.
    Finished { page: PageNumber },
    /// The render capability reported an error for `page`. The full error stays in the
    /// [`RenderReport`] of the call that drove the render.
    Failed { page: PageNumber, message: String },
}

/// A render that did not complete.
#[derive(Debug)]
pub struct RenderFailure {
    pub page: PageNumber,
    pub error: ViewerError,
}

/// Pages rendered by one `request` call, in the order they were drawn.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub rendered: Vec<PageNumber>,
    pub failures: Vec<RenderFailure>,
}

impl RenderReport {
    /// Last page that made it onto the canvas during this call
    pub fn last_rendered(&self) -> Option<PageNumber> {
        self.rendered.last().copied()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What happened to a single `request`.
#[derive(Debug)]
pub enum RequestOutcome {
    /// The coordinator was idle; this call drove one or more renders.
    Rendered(RenderReport),
    /// A render was already in flight; the page was parked as the pending request.
    Coalesced,
}

impl RequestOutcome {
    pub fn is_coalesced(&self) -> bool {
        matches!(self, RequestOutcome::Coalesced)
    }

    /// Report for calls that drove renders
    pub fn report(&self) -> Option<&RenderReport> {
        match self {
            RequestOutcome::Rendered(report) => Some(report),
            RequestOutcome::Coalesced => None,
        }
    }
}
