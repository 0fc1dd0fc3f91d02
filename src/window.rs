//! Fixed sentence-window selection.
//!
//! The window is an inclusive index range over the sentence sequence,
//! 58 to 68 by default. It is clipped at the end of the sequence, but the
//! sequence must at least reach the start index.
//!
//! ```text
//! sentences: [0] [1] ... [57] [58] [59] ... [68] [69] ...
//!                             |<--- window --->|
//!
//! 62 sentences:               [58] [59] [60] [61]        <- clipped, 4 long
//! 58 sentences:  InsufficientData { found: 58 }          <- index 58 missing
//! ```

use crate::{Error, Result, Slab};

/// First sentence index of the default window.
pub const WINDOW_START: usize = 58;

/// Last sentence index (inclusive) of the default window.
pub const WINDOW_END: usize = 68;

/// An inclusive range of sentence indices.
///
/// # Examples
///
/// ```rust
/// use pdf_window::{split_sentences, WindowBounds};
///
/// let text: String = (1..=70).map(|n| format!("Sentence {n}. ")).collect();
/// let sentences = split_sentences(&text);
///
/// let window = WindowBounds::default().select(&sentences).unwrap();
/// assert_eq!(window.len(), 11);
/// assert_eq!(window[0].index, 58);
/// assert_eq!(window[0].text, "Sentence 59.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    start: usize,
    end: usize,
}

impl WindowBounds {
    /// Create bounds covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// First index in the window.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last index in the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Largest number of sentences the window can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }

    /// Cut the window out of `sentences`.
    ///
    /// The returned slice keeps the sentences' original order and indices,
    /// and is never empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] with the actual sentence count if
    /// `sentences.len() <= start`.
    pub fn select<'a>(&self, sentences: &'a [Slab]) -> Result<&'a [Slab]> {
        if sentences.len() <= self.start {
            return Err(Error::InsufficientData {
                found: sentences.len(),
                start: self.start,
                end: self.end,
            });
        }

        let end = self.end.saturating_add(1).min(sentences.len());
        Ok(&sentences[self.start..end])
    }
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            start: WINDOW_START,
            end: WINDOW_END,
        }
    }
}

impl TryFrom<std::ops::RangeInclusive<usize>> for WindowBounds {
    type Error = Error;

    fn try_from(range: std::ops::RangeInclusive<usize>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}
