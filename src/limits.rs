//! Segment capacity configuration.
//!
//! ## Two Budgets at Once
//!
//! Remote model APIs constrain requests in two ways that don't reduce to
//! one number:
//!
//! - A practical ceiling on *how much* text fits in a request (characters)
//! - A practical ceiling on *how many* lines an answer can address before
//!   quality degrades (lines)
//!
//! ```text
//! 10,000 lines of "}" is tiny in characters, huge in review surface.
//! One 40 KB minified line is one line, far over any character budget.
//! ```
//!
//! `SegmentLimits` carries both caps. Segmentation closes a segment when
//! *either* budget would be exceeded by the next line.
//!
//! ## Defaults
//!
//! The defaults (500 lines, 15,000 characters) are sized so a segment plus
//! its instruction framing stays comfortably inside common model input
//! limits. Embedding applications can tighten or loosen them per model.

/// Capacity limits for one segment.
///
/// Character limits are measured in bytes, matching Rust's string length
/// semantics; for the source code this crate is aimed at the two are
/// nearly always identical.
///
/// # Examples
///
/// ```rust
/// use seams::SegmentLimits;
///
/// // The stock limits
/// let limits = SegmentLimits::default();
/// assert_eq!(limits.max_lines(), 500);
/// assert_eq!(limits.max_chars(), 15_000);
///
/// // Tightened for a smaller model
/// let limits = SegmentLimits::new(200, 6_000).unwrap();
/// assert_eq!(limits.max_lines(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLimits {
    max_lines: usize,
    max_chars: usize,
}

/// Default maximum lines per segment.
pub const DEFAULT_MAX_LINES: usize = 500;

/// Default maximum characters per segment.
pub const DEFAULT_MAX_CHARS: usize = 15_000;

impl SegmentLimits {
    /// Create limits with explicit caps.
    ///
    /// # Errors
    ///
    /// Returns an error if either cap is zero. A zero cap would force every
    /// line into its own over-budget segment, which is never what a caller
    /// wants.
    pub fn new(max_lines: usize, max_chars: usize) -> Result<Self, LimitsError> {
        if max_lines == 0 {
            return Err(LimitsError::ZeroLineLimit);
        }
        if max_chars == 0 {
            return Err(LimitsError::ZeroCharLimit);
        }
        Ok(Self {
            max_lines,
            max_chars,
        })
    }

    /// The maximum number of lines a segment may hold.
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// The maximum number of characters a segment may hold.
    ///
    /// A single line longer than this is still kept whole; see
    /// [`Segmenter::segment`](crate::Segmenter::segment).
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Replace the line cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_lines` is zero.
    pub fn with_max_lines(self, max_lines: usize) -> Result<Self, LimitsError> {
        Self::new(max_lines, self.max_chars)
    }

    /// Replace the character cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_chars` is zero.
    pub fn with_max_chars(self, max_chars: usize) -> Result<Self, LimitsError> {
        Self::new(self.max_lines, max_chars)
    }

    /// Whether a segment already holding `lines` lines and `chars`
    /// characters can take one more line of `line_len` characters.
    ///
    /// `line_len` should include the separator the line will carry
    /// (`+1` for `'\n'`).
    #[must_use]
    pub fn accepts(&self, lines: usize, chars: usize, line_len: usize) -> bool {
        lines < self.max_lines && chars.saturating_add(line_len) <= self.max_chars
    }
}

impl Default for SegmentLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Error when configuring segment limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitsError {
    /// The line cap must be at least one.
    #[error("max_lines must be > 0")]
    ZeroLineLimit,

    /// The character cap must be at least one.
    #[error("max_chars must be > 0")]
    ZeroCharLimit,
}
