//! # seams
//!
//! Line-aligned text segmentation for size-limited LLM request pipelines.
//!
//! ## The Problem
//!
//! Language models cap their input size. A 3,000-line source file doesn't
//! fit in one request, so it has to be split, submitted piece by piece, and
//! the per-piece answers stitched back into one document.
//!
//! Naive splitting every N characters won't do. Consider:
//!
//! - A source line cut in half is garbage to review
//! - Pieces that drop or duplicate a line corrupt the reassembled output
//! - Answers glued back in the wrong order are worse than no answer
//! - Two limits apply at once: a line budget *and* a character budget
//!
//! `seams` splits along the natural seams of the text—line boundaries—and
//! guarantees that the pieces reconstruct the original exactly.
//!
//! ## How Segmentation Works
//!
//! A single forward pass over the lines, closing the open segment whenever
//! the next line would not fit:
//!
//! ```text
//! max_lines = 2, max_chars = 20
//!
//! Input:        "fn main() {\n    run();\n}\n"
//!
//! Segment 0: "fn main() {\n    run();"   lines 1..=2  <- line budget hit
//! Segment 1: "}\n"                       lines 3..=4  <- trailing newline
//!                                                        is an empty line 4
//! ```
//!
//! Guarantees:
//!
//! - **Round trip**: joining segment contents with `'\n'` in index order
//!   reproduces the input byte for byte.
//! - **Contiguity**: `end_line + 1` of one segment is `start_line` of the
//!   next; indices are a dense `0..n`.
//! - **Completeness over strictness**: a single line longer than
//!   `max_chars` is kept whole as its own segment, never truncated.
//! - **Determinism**: same input, same limits, bit-identical output.
//!
//! ## Merging Results
//!
//! After the caller has submitted each segment and collected the answers
//! *in segment order*, [`merge_results`] rebuilds one labeled document:
//!
//! ```text
//! ### Part 1/3
//!
//! <answer for segment 0>
//!
//! ---
//!
//! ### Part 2/3
//! ...
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use seams::{merge_results, SegmentLimits, Segmenter};
//!
//! let segmenter = Segmenter::new(SegmentLimits::default());
//! let source = "line one\nline two\nline three";
//!
//! // Small inputs still come back as exactly one segment, so the
//! // single- and multi-segment paths look the same to the caller.
//! let segments = segmenter.segment(source);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].content, source);
//!
//! // One remote call per segment happens here, out of scope for this
//! // crate. Results must be collected in segment order.
//! let results = vec!["looks fine".to_string()];
//! let report = merge_results(&results);
//! assert!(report.contains("### Part 1/1"));
//! ```
//!
//! ## What This Crate Does Not Do
//!
//! No networking, no API keys, no retries, no persistence. The request
//! layer owns pacing (the usual pattern is one call at a time with a short
//! pause between calls) and owns keeping results paired with segment
//! indices. Every function here is a pure, total function of its inputs.

mod limits;
mod merge;
mod segment;
mod segmenter;

pub use limits::{LimitsError, SegmentLimits, DEFAULT_MAX_CHARS, DEFAULT_MAX_LINES};
pub use merge::{estimate_processing_time, merge_results};
pub use segment::Segment;
pub use segmenter::Segmenter;
