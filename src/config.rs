//! Pipeline configuration.

use crate::WindowBounds;

/// Characters of raw text shown in the report preview by default.
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// What to select and show for each document.
///
/// # Examples
///
/// ```rust
/// use pdf_window::{PipelineConfig, WindowBounds};
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.bounds(), WindowBounds::default());
/// assert_eq!(config.preview_chars(), Some(2000));
///
/// let config = PipelineConfig::default()
///     .with_bounds(WindowBounds::new(0, 4).unwrap())
///     .without_preview();
/// assert_eq!(config.bounds().end(), 4);
/// assert_eq!(config.preview_chars(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    bounds: WindowBounds,
    preview_chars: Option<usize>,
}

impl PipelineConfig {
    /// The sentence window to select.
    #[must_use]
    pub const fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    /// How many characters of raw text to preview, if any.
    #[must_use]
    pub const fn preview_chars(&self) -> Option<usize> {
        self.preview_chars
    }

    /// Select a different sentence window.
    #[must_use]
    pub const fn with_bounds(self, bounds: WindowBounds) -> Self {
        Self { bounds, ..self }
    }

    /// Change the preview length.
    #[must_use]
    pub const fn with_preview_chars(self, preview_chars: usize) -> Self {
        Self {
            preview_chars: Some(preview_chars),
            ..self
        }
    }

    /// Leave the raw text preview out of the report.
    #[must_use]
    pub const fn without_preview(self) -> Self {
        Self {
            preview_chars: None,
            ..self
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bounds: WindowBounds::default(),
            preview_chars: Some(DEFAULT_PREVIEW_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.bounds().start(), 58);
        assert_eq!(config.bounds().end(), 68);
        assert_eq!(config.preview_chars(), Some(DEFAULT_PREVIEW_CHARS));
    }

    #[test]
    fn test_preview_override() {
        let config = PipelineConfig::default().with_preview_chars(10);
        assert_eq!(config.preview_chars(), Some(10));
        assert_eq!(config.bounds(), WindowBounds::default());
    }
}
