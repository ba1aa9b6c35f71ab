//! The segmentation pass: one forward scan, two budgets.
//!
//! ## The Algorithm
//!
//! ```text
//! for each line:
//!     if the open segment is at its line cap,
//!        or adding this line would blow the character cap:
//!            close the open segment (if it has anything in it)
//!     append the line to the open segment
//! close whatever is left
//! back-fill total_segments on every segment
//! ```
//!
//! Two consequences fall out of "close *before* adding, append *always*":
//!
//! - No line is ever dropped, truncated, or split across segments.
//! - A single line longer than the character cap becomes the sole content
//!   of its segment. Completeness wins over strict bound enforcement; the
//!   request layer can decide what to do with an oversized request, but it
//!   never receives half a line.
//!
//! ## Why Lines?
//!
//! The inputs are source files. Review feedback references line numbers,
//! and a line split mid-token is meaningless to both the model and the
//! human reading the answer. Cutting only at line boundaries keeps every
//! segment syntactically intact at the line level and makes the
//! reassembly guarantee cheap to state: join with `'\n'`, get the
//! original back.

use crate::{Segment, SegmentLimits};

/// Splits oversized text into bounded, line-aligned segments.
///
/// The segmenter is pure and synchronous: no I/O, no shared state, and the
/// same input always produces bit-identical output.
///
/// ## Example
///
/// ```rust
/// use seams::{SegmentLimits, Segmenter};
///
/// let segmenter = Segmenter::new(SegmentLimits::new(500, 15_000).unwrap());
///
/// let source: String = (1..=1200)
///     .map(|i| format!("line {i:04}\n"))
///     .collect::<String>()
///     .trim_end()
///     .to_string();
///
/// assert!(segmenter.needs_segmentation(&source));
///
/// let segments = segmenter.segment(&source);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].line_range(), 1..=500);
/// assert_eq!(segments[2].line_range(), 1001..=1200);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    limits: SegmentLimits,
}

impl Segmenter {
    /// Create a segmenter with the given limits.
    #[must_use]
    pub const fn new(limits: SegmentLimits) -> Self {
        Self { limits }
    }

    /// The limits this segmenter applies.
    #[must_use]
    pub const fn limits(&self) -> SegmentLimits {
        self.limits
    }

    /// Whether `text` exceeds either capacity limit.
    ///
    /// True iff the text has more lines than `max_lines` or more
    /// characters than `max_chars`. Pure; O(n) in the text length from
    /// counting lines.
    #[must_use]
    pub fn needs_segmentation(&self, text: &str) -> bool {
        text.len() > self.limits.max_chars()
            || text.split('\n').count() > self.limits.max_lines()
    }

    /// Split `text` into an ordered sequence of line-aligned segments.
    ///
    /// Always returns at least one segment. Text within both limits comes
    /// back as a single segment spanning the whole input, so callers treat
    /// the small and large cases uniformly.
    ///
    /// See the [module docs](self) for the guarantees; in short: exact
    /// round trip under `join("\n")`, contiguous 1-based line spans, dense
    /// indices, and oversized single lines kept whole.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let lines: Vec<&str> = text.split('\n').collect();

        if !self.needs_segmentation(text) {
            return finish(vec![Segment::new(text, 1, lines.len(), 0)]);
        }

        let mut segments = Vec::with_capacity(self.estimate_segments(text.len()));
        let mut current: Vec<&str> = Vec::new();
        let mut current_chars = 0usize;
        let mut start_line = 1usize;
        let mut index = 0usize;

        for (i, &line) in lines.iter().enumerate() {
            // +1 for the separator this line carries when rejoined
            let line_len = line.len() + 1;

            if !self.limits.accepts(current.len(), current_chars, line_len)
                && !current.is_empty()
            {
                segments.push(Segment::new(
                    current.join("\n"),
                    start_line,
                    start_line + current.len() - 1,
                    index,
                ));
                index += 1;
                current.clear();
                current_chars = 0;
                start_line = i + 1;
            }

            current.push(line);
            current_chars += line_len;
        }

        if !current.is_empty() {
            segments.push(Segment::new(
                current.join("\n"),
                start_line,
                start_line + current.len() - 1,
                index,
            ));
        }

        finish(segments)
    }

    /// Estimate the number of segments for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate; `segment` is the
    /// source of truth.
    #[must_use]
    pub fn estimate_segments(&self, text_len: usize) -> usize {
        (text_len / self.limits.max_chars()).max(1)
    }
}

/// Back-fill `total_segments` now that the pass is complete.
fn finish(mut segments: Vec<Segment>) -> Vec<Segment> {
    let total = segments.len();
    for segment in &mut segments {
        segment.total_segments = total;
    }
    segments
}
