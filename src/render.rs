//! Rendering subsystem.
//!
//! [`PageRenderer`] is the capability the viewer consumes: draw page N at scale S onto the
//! canvas. [`RenderCoordinator`] sits in front of it and makes sure only one render runs at a
//! time while the most recent request always wins.

pub mod canvas;
pub mod coordinator;
pub mod layout;
pub mod protocol;
pub mod surface;

use crate::document::PageNumber;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub use canvas::Canvas;
pub use coordinator::{RenderClaim, RenderCoordinator, RenderState};
pub use layout::FitWidth;
pub use protocol::{RenderEvent, RenderFailure, RenderReport, RequestOutcome};
pub use surface::SurfaceRenderer;

/// External render capability.
///
/// Implementations draw `page` at `scale` onto whatever pixel surface they own and resolve
/// once the frame is complete.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render_page(&self, page: PageNumber, scale: f32) -> Result<()>;
}

#[async_trait]
impl<R: PageRenderer + ?Sized> PageRenderer for Arc<R> {
    async fn render_page(&self, page: PageNumber, scale: f32) -> Result<()> {
        (**self).render_page(page, scale).await
    }
}
