//! Sentence splitting.
//!
//! Splits text into sentences, and groups N sentences per chunk.
//!
//! ## The Hard Part: Finding Sentences
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! Text pulled out of a PDF adds its own problem: lines are hard-wrapped, so
//! a single sentence arrives with newlines in the middle of it.
//!
//! We start from Unicode Standard Annex #29 (UAX #29) sentence bounds, which
//! already handle decimal numbers (3.14159), ellipses followed by lowercase
//! text, and URLs. UAX #29 is purely character-class based, so it breaks
//! after every `Dr.` followed by a capital and after every line break. Three
//! heuristics then veto bounds:
//!
//! 1. A bound counts only if the segment ends in terminal punctuation
//!    (`.` `?` `!` `…`), looking through closing quotes and brackets.
//! 2. A period after a known abbreviation, a single-letter initial, or a
//!    dotted run of short letter groups (`U.S.`, `e.g.`) is not a sentence
//!    end. Dotted numbers (`version 2.0.`) still end sentences.
//! 3. A bound followed by a lowercase letter is not a sentence end.
//!
//! ```text
//! segments:  "Dr. " | "Smith wrote\n" | "the report. " | "It was long."
//! rule 2:     merge
//! rule 1:              merge
//! result:    "Dr. Smith wrote\nthe report." | "It was long."
//! ```
//!
//! A sentence that really ends in a capital letter
//! (`"we chose plan A. Then it rained."`) stays joined to the next one. The
//! pronoun `I` is never read as an initial.
//!
//! The abbreviation list is process-wide model data. It is built once, on
//! first use or by an explicit [`init`], and never rebuilt.

use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::{Chunker, Slab};

static MODEL: OnceLock<AbbreviationModel> = OnceLock::new();

/// Abbreviations that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    // Titles
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon", "gen", "col", "lt", "sgt",
    "capt", "gov", "sen", "rep",
    // Months and days
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon",
    "tue", "wed", "thu", "fri", "sat", "sun",
    // Organisations and places
    "inc", "ltd", "co", "corp", "dept", "univ", "mt", "ave", "blvd", "rd",
    // Academic and reference
    "etc", "vs", "al", "cf", "ibid", "viz", "ca", "approx", "est", "fig", "figs", "eq", "eqs",
    "vol", "vols", "pp", "ch", "sec", "ed", "eds",
];

/// Characters that may follow terminal punctuation inside the same sentence.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];

/// Characters that may precede the first letter of a token.
const OPENERS: &[char] = &['"', '\'', '(', '[', '{', '«', '“', '‘'];

#[derive(Debug)]
struct AbbreviationModel {
    abbreviations: HashSet<&'static str>,
}

impl AbbreviationModel {
    fn new() -> Self {
        tracing::debug!(count = ABBREVIATIONS.len(), "loading abbreviation model");
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Whether `token` (the word before a period, period excluded) is an
    /// abbreviation rather than the end of a sentence.
    fn is_abbreviation(&self, token: &str) -> bool {
        let token = token.trim_start_matches(OPENERS);
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            // The pronoun, not an initial
            (Some('I'), None) => false,
            // An initial: "J. R. R. Tolkien"
            (Some(c), None) => c.is_alphabetic(),
            _ if token.contains('.') => is_dotted_letters(token),
            _ => self
                .abbreviations
                .contains(token.to_lowercase().as_str()),
        }
    }
}

/// Short letter runs joined by periods: "U.S", "e.g", "Ph.D".
///
/// Numbers ("2.0", "3.1") and dotted names ("example.com") don't qualify.
fn is_dotted_letters(token: &str) -> bool {
    token.split('.').all(|part| {
        let len = part.chars().count();
        (1..=2).contains(&len) && part.chars().all(char::is_alphabetic)
    })
}

fn model() -> &'static AbbreviationModel {
    MODEL.get_or_init(AbbreviationModel::new)
}

/// Load the sentence model now instead of on first use.
///
/// Safe to call any number of times; only the first call does work.
pub fn init() {
    let _ = model();
}

/// Split text into sentences.
///
/// Returns one [`Slab`] per sentence in reading order. Slab text is trimmed
/// and `start..end` is the byte span of that trimmed text in `text`.
/// Empty or whitespace-only input yields no sentences.
///
/// ```rust
/// use pdf_window::split_sentences;
///
/// let sentences = split_sentences("Dr. Smith arrived. He sat down.");
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text, "Dr. Smith arrived.");
/// assert_eq!(sentences[1].index, 1);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<Slab> {
    if text.trim().is_empty() {
        return vec![];
    }

    let model = model();

    let segments: Vec<(usize, &str)> = text
        .split_sentence_bounds()
        .scan(0usize, |offset, s| {
            let start = *offset;
            *offset += s.len();
            Some((start, s))
        })
        .collect();

    let mut sentences = Vec::new();
    let mut pending: Option<usize> = None;

    for (i, &(offset, segment)) in segments.iter().enumerate() {
        let start = *pending.get_or_insert(offset);
        let next = segments.get(i + 1).map(|(_, s)| *s);

        if next.map_or(true, |next| ends_sentence(model, segment, next)) {
            push_trimmed(text, start, offset + segment.len(), &mut sentences);
            pending = None;
        }
    }

    sentences
}

/// Decide whether the bound between `segment` and `next` is a sentence end.
fn ends_sentence(model: &AbbreviationModel, segment: &str, next: &str) -> bool {
    let body = segment.trim_end().trim_end_matches(CLOSERS);

    let Some(last) = body.chars().last() else {
        return false;
    };
    if !matches!(last, '.' | '?' | '!' | '…' | '。' | '？' | '！') {
        return false;
    }

    if next
        .trim_start()
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
    {
        return false;
    }

    // "..." is an ellipsis, not an abbreviation
    if last == '.' && !body.ends_with("..") {
        let without_period = &body[..body.len() - 1];
        let token = without_period
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(without_period);
        if model.is_abbreviation(token) {
            return false;
        }
    }

    true
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Slab>) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let leading_ws = raw.len() - raw.trim_start().len();
    let trailing_ws = raw.len() - raw.trim_end().len();
    out.push(Slab::new(
        trimmed,
        start + leading_ws,
        end - trailing_ws,
        out.len(),
    ));
}

/// Sentence-based chunker.
///
/// Groups consecutive sentences into chunks. With one sentence per chunk it
/// is the sentence splitter behind the [`Chunker`] trait.
///
/// ## Example
///
/// ```rust
/// use pdf_window::{Chunker, SentenceChunker};
///
/// let chunker = SentenceChunker::new(2);
/// let text = "First sentence. Second sentence. Third sentence.";
/// let slabs = chunker.chunk(text);
///
/// assert_eq!(slabs.len(), 2);
/// assert!(slabs[0].text.contains("First"));
/// assert!(slabs[0].text.contains("Second"));
/// ```
#[derive(Debug, Clone)]
pub struct SentenceChunker {
    sentences_per_chunk: usize,
}

impl SentenceChunker {
    /// Create a new sentence chunker.
    ///
    /// # Arguments
    ///
    /// * `sentences_per_chunk` - Number of sentences to group together
    ///
    /// # Panics
    ///
    /// Panics if `sentences_per_chunk == 0`.
    #[must_use]
    pub fn new(sentences_per_chunk: usize) -> Self {
        assert!(sentences_per_chunk > 0, "sentences_per_chunk must be > 0");
        Self { sentences_per_chunk }
    }

    /// Create a chunker that outputs one sentence per chunk.
    #[must_use]
    pub fn single() -> Self {
        Self::new(1)
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::single()
    }
}

impl Chunker for SentenceChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        let sentences = split_sentences(text);
        if self.sentences_per_chunk == 1 {
            return sentences;
        }

        sentences
            .chunks(self.sentences_per_chunk)
            .enumerate()
            .filter_map(|(index, group)| {
                let start = group.first()?.start;
                let end = group.last()?.end;
                Some(Slab::new(&text[start..end], start, end, index))
            })
            .collect()
    }
}
