//! Reassembly of per-segment results and progress estimation.
//!
//! The request layer submits one request per segment and collects one
//! free-form answer per segment, in segment order. This module turns that
//! ordered list back into a single document a human can read top to
//! bottom, with each answer filed under the part it came from.

use std::time::Duration;

/// Rough cost of one segment's round trip (request + model + handling).
const SECS_PER_SEGMENT: u64 = 5;

/// Merge ordered per-segment results into one labeled document.
///
/// Result `i` of `n` is emitted under a `### Part {i+1}/{n}` heading, and
/// parts are separated by a horizontal rule. Nothing is reordered, skipped,
/// or summarized; the scaffolding is all this function adds.
///
/// The caller is responsible for passing results in segment order and for
/// passing one result per segment. The function merges whatever it is
/// given: part totals are derived from `results.len()`, so a short or long
/// list is labeled consistently with itself, not with the segmentation
/// that produced it.
///
/// ```rust
/// use seams::merge_results;
///
/// let merged = merge_results(&["first answer", "second answer"]);
/// assert_eq!(
///     merged,
///     "### Part 1/2\n\nfirst answer\n\n---\n\n### Part 2/2\n\nsecond answer"
/// );
/// ```
///
/// An empty result list merges to the empty string.
#[must_use]
pub fn merge_results<S: AsRef<str>>(results: &[S]) -> String {
    let total = results.len();
    results
        .iter()
        .enumerate()
        .map(|(i, result)| format!("### Part {}/{}\n\n{}", i + 1, total, result.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Estimate wall-clock time to process `segment_count` segments.
///
/// Linear and monotonic: a fixed per-segment cost times the count. Only
/// for progress display; actual latency depends on the remote model and
/// the request layer's pacing.
///
/// ```rust
/// use seams::estimate_processing_time;
/// use std::time::Duration;
///
/// assert_eq!(estimate_processing_time(3), Duration::from_secs(15));
/// assert_eq!(estimate_processing_time(0), Duration::ZERO);
/// ```
#[must_use]
pub fn estimate_processing_time(segment_count: usize) -> Duration {
    Duration::from_secs(segment_count as u64 * SECS_PER_SEGMENT)
}
