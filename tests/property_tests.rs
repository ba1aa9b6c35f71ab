//! Property-based tests for line segmentation.
//!
//! These tests verify the invariants segmentation promises:
//! - Round trip: segments rejoin to the original text
//! - Contiguity: line spans are adjacent, indices are dense
//! - Capacity: budgets hold, with the oversized-single-line exception
//! - Totals: every segment carries the final segment count
//! - Determinism: identical runs produce identical output

use proptest::prelude::*;
use seams::{merge_results, Segment, SegmentLimits, Segmenter};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate text as a bundle of short lines, some empty.
fn line_structured_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[ -~]{0,30}").unwrap(), 0..80)
        .prop_map(|lines| lines.join("\n"))
}

/// Generate text that occasionally contains a line far over the char cap.
fn text_with_long_lines() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::string::string_regex("[a-z ]{0,20}").unwrap(),
            1 => prop::string::string_regex("[A-Z]{150,300}").unwrap(),
        ],
        1..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Small limits so modest inputs still exercise the multi-segment path.
fn small_limits() -> SegmentLimits {
    SegmentLimits::new(7, 120).unwrap()
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Rejoin segment contents in index order with the original separator.
fn rejoin(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check spans are contiguous 1-based ranges and indices are dense.
fn contiguous_and_dense(segments: &[Segment]) -> bool {
    if segments.first().map(|s| (s.index, s.start_line)) != Some((0, 1)) {
        return false;
    }
    for window in segments.windows(2) {
        if window[1].index != window[0].index + 1 {
            return false;
        }
        if window[1].start_line != window[0].end_line + 1 {
            return false;
        }
    }
    segments.iter().all(|s| s.start_line <= s.end_line)
}

// =============================================================================
// Segmentation Properties
// =============================================================================

proptest! {
    #[test]
    fn round_trip_reconstructs_input(text in line_structured_text()) {
        let segmenter = Segmenter::new(small_limits());
        let segments = segmenter.segment(&text);
        prop_assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn round_trip_with_oversized_lines(text in text_with_long_lines()) {
        let segmenter = Segmenter::new(small_limits());
        let segments = segmenter.segment(&text);
        prop_assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn spans_contiguous_indices_dense(text in line_structured_text()) {
        let segmenter = Segmenter::new(small_limits());
        let segments = segmenter.segment(&text);
        prop_assert!(contiguous_and_dense(&segments));
    }

    #[test]
    fn last_segment_ends_at_last_line(text in line_structured_text()) {
        let segmenter = Segmenter::new(small_limits());
        let segments = segmenter.segment(&text);
        let total_lines = text.split('\n').count();
        prop_assert_eq!(segments.last().map(|s| s.end_line), Some(total_lines));
    }

    #[test]
    fn line_budget_always_holds(text in text_with_long_lines()) {
        let limits = small_limits();
        let segmenter = Segmenter::new(limits);
        for segment in segmenter.segment(&text) {
            prop_assert!(segment.line_count() <= limits.max_lines());
        }
    }

    #[test]
    fn char_budget_exceeded_only_by_lone_lines(text in text_with_long_lines()) {
        let limits = small_limits();
        let segmenter = Segmenter::new(limits);
        for segment in segmenter.segment(&text) {
            if segment.len() > limits.max_chars() {
                prop_assert_eq!(
                    segment.line_count(), 1,
                    "over-budget segment {} holds more than one line", segment.index
                );
            }
        }
    }

    #[test]
    fn totals_uniform_and_correct(text in line_structured_text()) {
        let segmenter = Segmenter::new(small_limits());
        let segments = segmenter.segment(&text);
        let total = segments.len();
        prop_assert!(segments.iter().all(|s| s.total_segments == total));
    }

    #[test]
    fn below_threshold_yields_one_segment(text in prop::string::string_regex("[ -~\n]{0,100}").unwrap()) {
        let segmenter = Segmenter::default();
        prop_assume!(!segmenter.needs_segmentation(&text));

        let segments = segmenter.segment(&text);
        prop_assert_eq!(segments.len(), 1);
        prop_assert_eq!(segments[0].start_line, 1);
        prop_assert_eq!(segments[0].end_line, text.split('\n').count());
        prop_assert_eq!(segments[0].content.as_str(), text.as_str());
    }

    #[test]
    fn segmentation_is_deterministic(text in line_structured_text()) {
        let segmenter = Segmenter::new(small_limits());
        prop_assert_eq!(segmenter.segment(&text), segmenter.segment(&text));
    }

    #[test]
    fn always_at_least_one_segment(text in prop::string::string_regex("[ -~\n]{0,200}").unwrap()) {
        let segmenter = Segmenter::new(small_limits());
        prop_assert!(!segmenter.segment(&text).is_empty());
    }
}

// =============================================================================
// Merge Properties
// =============================================================================

proptest! {
    #[test]
    fn merge_preserves_order_and_content(
        results in prop::collection::vec(prop::string::string_regex("[a-z]{5,15}").unwrap(), 1..8)
    ) {
        let merged = merge_results(&results);
        let total = results.len();

        let mut cursor = 0;
        for (i, result) in results.iter().enumerate() {
            let heading = format!("### Part {}/{}", i + 1, total);
            let at = merged[cursor..].find(&heading)
                .expect("heading missing or out of order") + cursor;
            let body = merged[at..].find(result.as_str())
                .expect("result missing after its heading") + at;
            cursor = body;
        }
    }

    #[test]
    fn merge_delimiter_count_matches(
        results in prop::collection::vec(prop::string::string_regex("[a-z]{1,10}").unwrap(), 1..8)
    ) {
        let merged = merge_results(&results);
        prop_assert_eq!(merged.matches("\n\n---\n\n").count(), results.len() - 1);
    }
}
