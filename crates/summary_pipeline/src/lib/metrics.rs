use std::time::Duration;

/// Derived quality metrics for one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub original_word_count: usize,
    pub summary_word_count: usize,
    pub compression_ratio: f64,
    pub processing_time_seconds: f64,
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Computes word counts and compression ratio for a finished run.
///
/// The denominator is floored at 1 so an empty summary cannot divide by
/// zero.
pub fn compute_metrics(original: &str, summary: &str, elapsed: Duration) -> SummaryMetrics {
    let original_word_count = word_count(original);
    let summary_word_count = word_count(summary);
    SummaryMetrics {
        original_word_count,
        summary_word_count,
        compression_ratio: original_word_count as f64 / summary_word_count.max(1) as f64,
        processing_time_seconds: elapsed.as_secs_f64(),
    }
}
