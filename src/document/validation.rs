//! File validation utilities for ensuring a path holds a PDF worth parsing.
//!
//! These checks run before the document is handed to the PDF library so that common
//! mistakes produce a clear message instead of a parser error.

use crate::error::{Result, ViewerError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Every PDF file starts with this marker.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Validate that a path is accessible and looks like a PDF document
///
/// # Validations Performed
/// - Path exists and is a regular file
/// - File is readable by the current process
/// - File is not empty
/// - File starts with the `%PDF-` header
///
/// # Error Cases
/// - `FileNotFound` if nothing exists at the path
/// - `NotAFile` for directories and other non-regular files
/// - `FileError` if metadata or contents cannot be read
/// - `InvalidDocument` for empty files or a missing header
pub fn validate_document_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| ViewerError::file_error("Failed to read file metadata", e))?;

    if !metadata.is_file() {
        return Err(ViewerError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(ViewerError::invalid_document(format!(
            "File is empty: {}",
            path.display()
        )));
    }

    let mut header = [0u8; 5];
    let mut file =
        File::open(path).map_err(|e| ViewerError::file_error("Cannot open file for reading", e))?;
    let read = file
        .read(&mut header)
        .map_err(|e| ViewerError::file_error("Cannot read file header", e))?;

    if &header[..read] != PDF_MAGIC {
        return Err(ViewerError::invalid_document(format!(
            "Missing PDF header: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_pdf_header() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n").unwrap();
        file.flush().unwrap();

        assert!(validate_document_path(file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_document_path(Path::new("/nonexistent/file.pdf"));
        assert!(matches!(result, Err(ViewerError::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_document_path(temp_dir.path());
        assert!(matches!(result, Err(ViewerError::NotAFile { .. })));
    }

    #[test]
    fn test_validate_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let result = validate_document_path(file.path());

        match result {
            Err(ViewerError::InvalidDocument { message }) => {
                assert!(message.contains("empty"));
            }
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_short_non_pdf_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"%PD").unwrap();
        file.flush().unwrap();

        let result = validate_document_path(file.path());
        assert!(matches!(result, Err(ViewerError::InvalidDocument { .. })));
    }
}
