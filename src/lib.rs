//! # pdfglance - Single-Document PDF Viewer
//!
//! A thin viewer that wraps a third-party PDF library to show one document a page at a time
//! on a pixel canvas.
//!
//! ## Features
//!
//! - **Single-flight rendering**: at most one page render runs at any moment
//! - **Coalesced navigation**: requests made while busy collapse to the most recent page
//! - **Fit-to-width layout**: pages are scaled to the container width with a size cap
//! - **Snapshots**: the canvas can be written to PNG after every completed render
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`document`] - Document loading and page geometry via `lopdf`
//! - [`render`] - Render capability, canvas and the render coordinator
//! - [`navigation`] - Clamped page navigation
//! - [`input`] - Text command parsing
//! - [`config`] - Viewer configuration
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod document;
pub mod error;

// Subsystems
pub mod input;
pub mod navigation;
pub mod render;

// Application wiring
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, ViewerError};

// Public API surface for external usage
pub use app::Viewer;
pub use config::ViewerConfig;
pub use document::{Document, DocumentLoader, LopdfLoader, PageNumber, PageSize};
pub use render::{Canvas, PageRenderer, RenderCoordinator, RequestOutcome};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
