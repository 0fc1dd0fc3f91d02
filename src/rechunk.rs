//! Re-chunking a sentence window.
//!
//! The window's sentences are joined with single spaces and split again.
//! Joining adds no punctuation, so the chunks usually come out identical to
//! the window sentences. They can differ when a window sentence has no
//! terminal punctuation (it merges into the next) or when a join puts a
//! lowercase start right after a period.

use crate::{Chunker, SentenceChunker, Slab};

/// The joined window text and the chunks split from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rechunked {
    /// Window sentences joined by single spaces.
    pub sample_text: String,
    /// Chunks of `sample_text`, indexed from zero.
    pub chunks: Vec<Slab>,
}

/// Re-split a window with the sentence splitter.
///
/// ```rust
/// use pdf_window::{rechunk, split_sentences};
///
/// let sentences = split_sentences("One. Two. Three.");
/// let out = rechunk(&sentences[1..]);
///
/// assert_eq!(out.sample_text, "Two. Three.");
/// assert_eq!(out.chunks.len(), 2);
/// ```
#[must_use]
pub fn rechunk(window: &[Slab]) -> Rechunked {
    rechunk_with(window, &SentenceChunker::single())
}

/// Re-split a window with any [`Chunker`].
#[must_use]
pub fn rechunk_with(window: &[Slab], chunker: &dyn Chunker) -> Rechunked {
    let sample_text = window
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let chunks = chunker.chunk(&sample_text);
    tracing::debug!(
        window = window.len(),
        chunks = chunks.len(),
        "re-chunked sentence window"
    );

    Rechunked {
        sample_text,
        chunks,
    }
}
