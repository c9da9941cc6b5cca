//! View state for the status line.
//!
//! Rendering itself lives in the coordinator; this only tracks what the user should be told.

use crate::document::PageNumber;
use std::path::{Path, PathBuf};

/// What the viewer currently shows and where navigation stands
#[derive(Debug)]
pub struct ViewState {
    /// Document path for display
    pub file_path: PathBuf,

    /// Page the user navigated to (the last one requested)
    pub current_page: PageNumber,

    /// Total pages in the document
    pub page_count: u32,

    /// Page the canvas holds, None until the first render completes
    pub shown_page: Option<PageNumber>,

    /// A render is in progress (loading indicator)
    pub loading: bool,

    /// Status line content
    pub status_line: StatusLine,
}

impl ViewState {
    pub fn new(file_path: impl AsRef<Path>, page_count: u32) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            current_page: PageNumber::FIRST,
            page_count,
            shown_page: None,
            loading: false,
            status_line: StatusLine::new(),
        }
    }

    /// Get the filename for display
    pub fn filename(&self) -> String {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(
            &self.filename(),
            self.current_page,
            self.page_count,
            self.loading,
        )
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Clear any temporary message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display
    pub fn format_status_line(
        &self,
        filename: &str,
        current_page: PageNumber,
        page_count: u32,
        loading: bool,
    ) -> String {
        let mut line = format!("{} | page {}/{}", filename, current_page, page_count);
        if loading {
            line.push_str(" | loading");
        }
        if let Some(ref message) = self.message {
            line.push_str(" | ");
            line.push_str(message);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_creation() {
        let path = PathBuf::from("/docs/portfolio.pdf");
        let state = ViewState::new(path.clone(), 12);

        assert_eq!(state.file_path, path);
        assert_eq!(state.current_page, PageNumber::FIRST);
        assert_eq!(state.page_count, 12);
        assert!(state.shown_page.is_none());
        assert!(!state.loading);
        assert_eq!(state.filename(), "portfolio.pdf");
    }

    #[test]
    fn test_status_line_format() {
        let mut state = ViewState::new("/docs/portfolio.pdf", 12);
        state.current_page = PageNumber::new(3).unwrap();
        assert_eq!(state.format_status_line(), "portfolio.pdf | page 3/12");

        state.loading = true;
        assert_eq!(
            state.format_status_line(),
            "portfolio.pdf | page 3/12 | loading"
        );

        state.loading = false;
        state
            .status_line
            .set_message("Unknown command: zoom".to_string());
        assert_eq!(
            state.format_status_line(),
            "portfolio.pdf | page 3/12 | Unknown command: zoom"
        );

        state.status_line.clear_message();
        assert_eq!(state.format_status_line(), "portfolio.pdf | page 3/12");
    }

    #[test]
    fn test_unnamed_path() {
        let state = ViewState::new("/", 1);
        assert_eq!(state.filename(), "<unnamed>");
    }
}
