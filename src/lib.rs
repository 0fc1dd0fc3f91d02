//! # pdf-window
//!
//! Pull the text out of a PDF, split it into sentences, and look at a fixed
//! window of them.
//!
//! ## The Problem
//!
//! Sentence-level tooling (retrieval chunkers, annotators, evaluation sets)
//! is usually demonstrated on clean prose. Real input arrives as PDFs, and a
//! PDF has no sentences: it has pages of positioned glyphs. Getting from one
//! to the other is three steps that each fail in their own way:
//!
//! - A PDF may not parse at all
//! - It may parse but carry no text (a scan)
//! - It may carry text but too little of it for what you want to inspect
//!
//! ## The Pipeline
//!
//! ```text
//! PDF bytes
//!    |  Document::from_bytes        per-page extraction, failed pages -> ""
//!    v
//! full text                         pages joined by " ", trimmed
//!    |  split_sentences             UAX #29 + abbreviation heuristics
//!    v
//! sentences [0] [1] ... [n-1]
//!    |  WindowBounds::select        indices 58..=68, clipped at n-1
//!    v
//! window    [58] ... [68]
//!    |  rechunk                     join with " ", split again
//!    v
//! chunks    1. ... 11.
//! ```
//!
//! Re-chunking the window is a demonstration: joining sentences with spaces
//! introduces no new punctuation, so the chunks usually reproduce the window
//! sentences one for one.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_window::{process_document, Document, PipelineConfig};
//!
//! let text: String = (1..=70).map(|n| format!("Sentence {n}. ")).collect();
//! let document = Document::from_pages([text]);
//!
//! let report = process_document(&document, &PipelineConfig::default()).unwrap();
//! assert_eq!(report.window[0].index, 58);
//! assert_eq!(report.window[0].text, "Sentence 59.");
//!
//! println!("{}", report.render_markdown());
//! ```
//!
//! For a PDF on disk use [`process_path`]; for bytes in memory,
//! [`process_bytes`].
//!
//! ## Sentence Splitting
//!
//! ```rust
//! use pdf_window::split_sentences;
//!
//! let sentences = split_sentences("Dr. Smith went to Washington. He stayed\nfor a week.");
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1].text, "He stayed\nfor a week.");
//! ```
//!
//! The abbreviation model behind the splitter is loaded once per process.
//! Call [`sentence::init`] to load it eagerly; otherwise the first split does.

mod config;
mod error;
mod extract;
mod pipeline;
mod rechunk;
mod report;
pub mod sentence;
mod slab;
mod window;

pub use config::{PipelineConfig, DEFAULT_PREVIEW_CHARS};
pub use error::{Error, Result};
pub use extract::Document;
pub use pipeline::{ensure_pdf_path, process_bytes, process_document, process_path};
pub use rechunk::{rechunk, rechunk_with, Rechunked};
pub use report::{render_failure, BasicInfo, Report};
pub use sentence::{split_sentences, SentenceChunker};
pub use slab::Slab;
pub use window::{WindowBounds, WINDOW_END, WINDOW_START};

/// A text chunking strategy.
///
/// The re-chunking step takes any chunker, so a window can be re-split
/// with something other than the default one-sentence-per-chunk splitter:
///
/// ```rust
/// use pdf_window::{rechunk_with, split_sentences, Chunker, SentenceChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<pdf_window::Slab> {
///     chunker.chunk(text)
/// }
///
/// let text = "Hello world. This is a test. One more.";
/// let singles = chunk_document(&SentenceChunker::single(), text);
/// let pairs = chunk_document(&SentenceChunker::new(2), text);
/// assert_eq!(singles.len(), 3);
/// assert_eq!(pairs.len(), 2);
///
/// let window = split_sentences(text);
/// let out = rechunk_with(&window, &SentenceChunker::new(3));
/// assert_eq!(out.chunks.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] containing the text and its byte offsets
    /// in the original text.
    fn chunk(&self, text: &str) -> Vec<Slab>;
}
