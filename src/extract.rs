//! PDF text extraction.
//!
//! Loads a PDF with `lopdf` and extracts text page by page. A page whose
//! content cannot be decoded (unknown font encoding, broken content stream)
//! contributes an empty string; only a document that cannot be parsed at all
//! is an error.
//!
//! ```text
//! page 1: "Intro text."      \
//! page 2: ""  (failed)        }--> join(" ") --> trim --> full_text
//! page 3: "More text."       /
//! ```

use std::path::Path;

use lopdf::Document as PdfDocument;

use crate::{Error, Result};

/// Text extracted from a PDF, page by page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pages: Vec<String>,
    full_text: String,
}

impl Document {
    /// Extract text from PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentRead`] if the bytes are not a readable PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pdf = PdfDocument::load_mem(bytes)?;
        Ok(Self::from_pdf(&pdf))
    }

    /// Extract text from a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentRead`] if the file cannot be read or is not
    /// a readable PDF.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| Error::DocumentRead(format!("{}: {e}", path.display())))?;
        Self::from_bytes(&bytes)
    }

    /// Build a document from already-extracted page texts.
    ///
    /// ```rust
    /// use pdf_window::Document;
    ///
    /// let doc = Document::from_pages(["  First page.", "", "Third page.  "]);
    /// assert_eq!(doc.page_count(), 3);
    /// assert_eq!(doc.full_text(), "First page.  Third page.");
    /// ```
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages: Vec<String> = pages.into_iter().map(Into::into).collect();
        let full_text = pages.join(" ").trim().to_string();
        Self { pages, full_text }
    }

    fn from_pdf(pdf: &PdfDocument) -> Self {
        // BTreeMap keyed by page number, so iteration is in reading order
        let page_numbers: Vec<u32> = pdf.get_pages().keys().copied().collect();
        tracing::debug!(pages = page_numbers.len(), "extracting PDF text");

        let pages = page_numbers.iter().map(|&page| match pdf.extract_text(&[page]) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(page, error = %err, "page text extraction failed");
                String::new()
            }
        });

        Self::from_pages(pages)
    }

    /// Per-page text, in page order. Failed pages are empty.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages in the document.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All page texts joined by a single space, then trimmed.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Number of characters (not bytes) in [`Self::full_text`].
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.full_text.chars().count()
    }

    /// Whether no text was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }

    /// The first `max_chars` characters of the full text.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.full_text.char_indices().nth(max_chars) {
            Some((end, _)) => &self.full_text[..end],
            None => &self.full_text,
        }
    }
}
