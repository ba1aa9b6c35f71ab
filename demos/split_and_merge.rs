//! Split and Merge
//!
//! The full flow: decide whether a file needs splitting, segment it,
//! pretend to submit each piece, and merge the answers back.
//!
//! ```bash
//! cargo run --example split_and_merge
//! ```

use seams::{estimate_processing_time, merge_results, SegmentLimits, Segmenter};

fn main() {
    // Tight limits so a small demo input actually splits.
    let limits = SegmentLimits::new(4, 200).unwrap();
    let segmenter = Segmenter::new(limits);

    let source = "\
fn fib(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        _ => fib(n - 1) + fib(n - 2),
    }
}

fn main() {
    for i in 0..10 {
        println!(\"fib({i}) = {}\", fib(i));
    }
}";

    println!("Input: {} lines, {} chars", source.split('\n').count(), source.len());
    println!("Needs segmentation: {}\n", segmenter.needs_segmentation(source));

    let segments = segmenter.segment(source);
    println!(
        "Produced {} segments (estimated processing: {:?})\n",
        segments.len(),
        estimate_processing_time(segments.len())
    );

    // One request per segment would go out here, sequentially, with the
    // request layer pacing calls. We fake the answers.
    let mut results = Vec::with_capacity(segments.len());
    for segment in &segments {
        println!("{} -> {} chars", segment.describe(), segment.len());
        results.push(format!(
            "No issues found in lines {}-{}.",
            segment.start_line, segment.end_line
        ));
    }

    println!("\n=== merged report ===\n{}", merge_results(&results));
}
