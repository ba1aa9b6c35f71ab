//! The Segment type: a line-aligned slice of text with position metadata.

/// A contiguous run of lines cut from a larger document.
///
/// Segments are produced by [`Segmenter::segment`](crate::Segmenter::segment)
/// and are immutable afterwards. The name evokes stitching: the document is
/// cut along its seams (line boundaries) and the pieces carry enough
/// metadata to be sewn back together in order.
///
/// ## Line Numbers
///
/// `start_line` and `end_line` are 1-based and inclusive, the way editors
/// and compiler diagnostics count lines:
///
/// ```rust
/// use seams::{SegmentLimits, Segmenter};
///
/// let segmenter = Segmenter::new(SegmentLimits::new(2, 1_000).unwrap());
/// let segments = segmenter.segment("a\nb\nc\nd");
///
/// assert_eq!(segments[0].line_range(), 1..=2);
/// assert_eq!(segments[1].line_range(), 3..=4);
/// ```
///
/// Lines are the units of `str::split('\n')`: an empty document is one
/// empty line, and a trailing newline produces a final empty line. Adjacent
/// segments are contiguous (`end_line + 1 == next.start_line`), and joining
/// `content` values with `'\n'` in `index` order reproduces the original
/// document exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The segment text: its lines joined with `'\n'`, no trailing separator.
    pub content: String,
    /// 1-based first line of this segment in the original document.
    pub start_line: usize,
    /// 1-based last line (inclusive) of this segment in the original document.
    pub end_line: usize,
    /// Zero-based position of this segment in the sequence.
    pub index: usize,
    /// Number of segments produced by the segmentation pass this segment
    /// belongs to. Known only once the pass completes, so the segmenter
    /// back-fills it onto every segment before returning.
    pub total_segments: usize,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        start_line: usize,
        end_line: usize,
        index: usize,
    ) -> Self {
        Self {
            content: content.into(),
            start_line,
            end_line,
            index,
            total_segments: 0,
        }
    }

    /// The length of this segment's content in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this segment's content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// How many lines this segment covers.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// The inclusive range of original line numbers this segment covers.
    #[must_use]
    pub const fn line_range(&self) -> std::ops::RangeInclusive<usize> {
        self.start_line..=self.end_line
    }

    /// A short human-readable label for progress display.
    ///
    /// ```rust
    /// use seams::Segment;
    ///
    /// let mut segment = Segment::new("fn main() {}", 501, 1000, 1);
    /// segment.total_segments = 3;
    /// assert_eq!(segment.describe(), "Part 2/3 (lines 501-1000)");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Part {}/{} (lines {}-{})",
            self.index + 1,
            self.total_segments,
            self.start_line,
            self.end_line
        )
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{ index: {}/{}, lines: {}..={}, len: {} }}",
            self.index,
            self.total_segments,
            self.start_line,
            self.end_line,
            self.len()
        )
    }
}
