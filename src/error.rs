//! Error types for pdf-window.

use std::path::PathBuf;

/// Errors that can stop a document on its way to a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be read or is not a valid PDF.
    #[error("error reading PDF: {0}")]
    DocumentRead(String),

    /// The input path does not name a PDF file.
    #[error("not a PDF file: {}", .0.display())]
    NotPdf(PathBuf),

    /// Extraction succeeded but produced no characters.
    #[error("no text could be extracted from this PDF ({page_count} pages, 0 characters)")]
    EmptyText {
        /// Number of pages in the document.
        page_count: usize,
    },

    /// Too few sentences to reach the start of the window.
    #[error(
        "this PDF has only {found} sentences, so indices {start}-{end} are not available; \
         please use a PDF with more text"
    )]
    InsufficientData {
        /// Number of sentences detected.
        found: usize,
        /// First index of the requested window.
        start: usize,
        /// Last index (inclusive) of the requested window.
        end: usize,
    },

    /// Window bounds are inverted.
    #[error("invalid window bounds: start {start} > end {end}")]
    InvalidBounds {
        /// The requested start index.
        start: usize,
        /// The requested end index.
        end: usize,
    },
}

impl Error {
    /// Minimum sentence count for an [`Error::InsufficientData`] to clear.
    #[must_use]
    pub fn required_sentences(&self) -> Option<usize> {
        match self {
            Self::InsufficientData { start, .. } => Some(start + 1),
            _ => None,
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Self::DocumentRead(err.to_string())
    }
}

/// Result type for pdf-window operations.
pub type Result<T> = std::result::Result<T, Error>;
