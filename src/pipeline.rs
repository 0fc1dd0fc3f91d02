//! Document processing pipeline.
//!
//! ```text
//! bytes -> Document -> full_text -> sentences -> window -> chunks -> Report
//!             |            |             |
//!        DocumentRead  EmptyText  InsufficientData
//! ```
//!
//! Each stage halts the pipeline on its error; nothing downstream runs.

use std::path::Path;

use crate::{rechunk, split_sentences, Document, Error, PipelineConfig, Report, Result};

/// Process PDF bytes into a report.
///
/// # Errors
///
/// [`Error::DocumentRead`] for unreadable bytes, [`Error::EmptyText`] when no
/// text is extracted, and [`Error::InsufficientData`] when the document has
/// too few sentences to reach the window.
pub fn process_bytes(bytes: &[u8], config: &PipelineConfig) -> Result<Report> {
    let document = Document::from_bytes(bytes)?;
    process_document(&document, config)
}

/// Process a PDF file into a report.
///
/// The path must have a `.pdf` extension (any case).
///
/// # Errors
///
/// [`Error::NotPdf`] for other extensions, then as [`process_bytes`].
pub fn process_path(path: &Path, config: &PipelineConfig) -> Result<Report> {
    ensure_pdf_path(path)?;
    let document = Document::from_path(path)?;
    process_document(&document, config)
}

/// Check that `path` has a `.pdf` extension (any case).
///
/// # Errors
///
/// [`Error::NotPdf`] otherwise.
pub fn ensure_pdf_path(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(())
    } else {
        Err(Error::NotPdf(path.to_path_buf()))
    }
}

/// Process already-extracted text into a report.
///
/// ```rust
/// use pdf_window::{process_document, Document, PipelineConfig};
///
/// let text: String = (1..=70).map(|n| format!("Sentence {n}. ")).collect();
/// let report = process_document(&Document::from_pages([text]), &PipelineConfig::default())
///     .unwrap();
///
/// assert_eq!(report.sentence_count, 70);
/// assert_eq!(report.window.len(), 11);
/// assert_eq!(report.chunks.len(), 11);
/// ```
///
/// # Errors
///
/// [`Error::EmptyText`] or [`Error::InsufficientData`].
pub fn process_document(document: &Document, config: &PipelineConfig) -> Result<Report> {
    tracing::debug!(
        pages = document.page_count(),
        chars = document.char_count(),
        "document extracted"
    );
    if document.is_empty() {
        return Err(Error::EmptyText {
            page_count: document.page_count(),
        });
    }

    let sentences = split_sentences(document.full_text());
    tracing::debug!(sentences = sentences.len(), "sentences detected");

    let bounds = config.bounds();
    let window = bounds.select(&sentences)?;
    let rechunked = rechunk(window);

    Ok(Report {
        page_count: document.page_count(),
        char_count: document.char_count(),
        sentence_count: sentences.len(),
        bounds,
        window: window.to_vec(),
        chunks: rechunked.chunks,
        preview: config
            .preview_chars()
            .map(|n| document.preview(n).to_string()),
    })
}
