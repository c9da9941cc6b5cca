//! Error types and handling infrastructure for pdfglance.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Context preservation**: Include relevant information for debugging
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pdfglance operations.
///
/// Covers document loading, rendering, the pixel surface and configuration.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// File system related errors (permission denied, unreadable file, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// The file could not be parsed as a PDF document
    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    /// A page number beyond the end of the document
    #[error("Page {page} out of range (page count: {page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// The render capability failed to draw a page
    #[error("Rendering page {page} failed: {message}")]
    RenderError { page: u32, message: String },

    /// Pixel surface errors (encoding, snapshot writes)
    #[error("Surface operation failed: {message}")]
    SurfaceError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for pdfglance operations.
pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidDocument error with a descriptive message
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create a RenderError for the given 1-based page
    pub fn render(page: u32, message: impl Into<String>) -> Self {
        Self::RenderError {
            page,
            message: message.into(),
        }
    }

    /// Create a SurfaceError with a descriptive message
    pub fn surface(message: impl Into<String>) -> Self {
        Self::SurfaceError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to ViewerError
impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<lopdf::Error> for ViewerError {
    fn from(err: lopdf::Error) -> Self {
        Self::invalid_document(err.to_string())
    }
}

impl From<image::ImageError> for ViewerError {
    fn from(err: image::ImageError) -> Self {
        Self::surface(err.to_string())
    }
}
