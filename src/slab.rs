//! The Slab type: a sentence or chunk with position metadata.

/// A piece of text with its position in the text it was split from.
///
/// Sentences and chunks are both slabs. A sentence slab's `index` is its
/// position in the document's sentence sequence, and it keeps that index when
/// a window is cut out of the sequence, so the window can be displayed as
/// `[58] ...`, `[59] ...`.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the source text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use pdf_window::Slab;
///
/// let text = "Hello there. General Kenobi.";
/// let slab = Slab::new("General Kenobi.", 13, 28, 1);
///
/// assert_eq!(&text[slab.span()], slab.text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The slab text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset where this slab starts in the source text.
    pub start: usize,
    /// Byte offset where this slab ends (exclusive) in the source text.
    pub end: usize,
    /// Zero-based index of this slab in its sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this slab in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this slab is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this slab in the source text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// One-based position, as chunks are numbered for display.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
