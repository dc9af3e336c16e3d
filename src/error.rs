//! Error types shared by the export pipeline.

use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Failures that abort an export.
///
/// Problems inside individual entries never show up here: the extractor
/// recovers them locally as empty strings. Anything coming out of the
/// rendering backend is propagated as-is so the caller can pick a fallback.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No usable font family could be loaded for the PDF backend.
    #[error("Failed to load fonts: {0}")]
    FontLoad(#[source] genpdf::error::Error),

    /// The genpdf renderer rejected a drawing or write operation.
    #[error("Rendering backend error: {0}")]
    Render(#[from] genpdf::error::Error),

    /// A page index outside `1..=count` was selected.
    #[error("Page {index} is out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    /// The content source could not be read at all.
    #[error("Content source unavailable: {0}")]
    Content(String),

    /// Malformed JSON in a content or configuration file.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading inputs or writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The section outline could not be embedded into the rendered PDF.
    #[cfg(feature = "bookmarks")]
    #[error("Failed to embed bookmarks: {0}")]
    Bookmarks(#[from] crate::bookmarks::BookmarkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_out_of_range_message() {
        let err = ExportError::PageOutOfRange { index: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "Page 7 is out of range (document has 3 pages)"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: ExportError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
