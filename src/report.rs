//! Markdown report of one processed document.

use std::fmt;

use crate::{Document, Error, Slab, WindowBounds};

/// The counts shown before any sentences, known as soon as text is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicInfo {
    /// Number of pages in the PDF.
    pub page_count: usize,
    /// Characters in the extracted full text.
    pub char_count: usize,
    /// Sentences detected, once splitting has run.
    pub sentence_count: Option<usize>,
}

impl fmt::Display for BasicInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Basic info")?;
        writeln!(f)?;
        writeln!(f, "Number of pages: **{}**", self.page_count)?;
        writeln!(f)?;
        writeln!(f, "Total characters extracted: **{}**", self.char_count)?;
        writeln!(f)?;
        if let Some(sentences) = self.sentence_count {
            writeln!(f, "Number of detected sentences: {sentences}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render what is known about `document` when processing stopped with `err`.
///
/// Basic info comes first, as far as processing got, then the error.
///
/// ```rust
/// use pdf_window::{process_document, render_failure, Document, PipelineConfig};
///
/// let document = Document::from_pages(["Too short. Far too short."]);
/// let err = process_document(&document, &PipelineConfig::default()).unwrap_err();
/// let md = render_failure(&document, &err);
///
/// assert!(md.contains("Number of detected sentences: 2"));
/// assert!(md.contains("at least 59 sentences"));
/// ```
#[must_use]
pub fn render_failure(document: &Document, err: &Error) -> String {
    let sentence_count = match err {
        Error::InsufficientData { found, .. } => Some(*found),
        _ => None,
    };
    let info = BasicInfo {
        page_count: document.page_count(),
        char_count: document.char_count(),
        sentence_count,
    };

    let mut out = format!("# PDF Sentence Chunker\n\n{info}**Error:** {err}\n");
    if let Some(required) = err.required_sentences() {
        out.push_str(&format!("\nThe window needs at least {required} sentences.\n"));
    }
    out
}

/// Everything shown for a successfully processed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of pages in the PDF.
    pub page_count: usize,
    /// Characters in the extracted full text.
    pub char_count: usize,
    /// Sentences detected in the full text.
    pub sentence_count: usize,
    /// The window that was selected.
    pub bounds: WindowBounds,
    /// Window sentences, carrying their original indices.
    pub window: Vec<Slab>,
    /// Chunks re-split from the joined window, indexed from zero.
    pub chunks: Vec<Slab>,
    /// Leading characters of the full text, if a preview was requested.
    pub preview: Option<String>,
}

impl Report {
    /// Render the report as markdown.
    #[must_use]
    pub fn render_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# PDF Sentence Chunker")?;
        writeln!(f)?;

        write!(
            f,
            "{}",
            BasicInfo {
                page_count: self.page_count,
                char_count: self.char_count,
                sentence_count: Some(self.sentence_count),
            }
        )?;

        writeln!(
            f,
            "## Sample sentences (indices {} to {})",
            self.bounds.start(),
            self.bounds.end()
        )?;
        writeln!(f)?;
        for sentence in &self.window {
            writeln!(f, "**[{}]** {}", sentence.index, one_line(&sentence.text))?;
            writeln!(f)?;
        }

        writeln!(f, "## Sentence chunking on the sample")?;
        writeln!(f)?;
        for chunk in &self.chunks {
            writeln!(
                f,
                "- **Chunk {}:** {}",
                chunk.ordinal(),
                one_line(&chunk.text)
            )?;
        }

        if let Some(preview) = &self.preview {
            writeln!(f)?;
            writeln!(
                f,
                "## Raw extracted text (first {} characters)",
                preview.chars().count()
            )?;
            writeln!(f)?;
            writeln!(f, "```text")?;
            writeln!(f, "{preview}")?;
            writeln!(f, "```")?;
        }

        Ok(())
    }
}

/// Collapse internal line breaks so a sentence stays on one markdown line.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
