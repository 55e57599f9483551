use summary_history::ModelProfile;

use crate::metrics::SummaryMetrics;

/// One summarization request as submitted by the presentation layer.
///
/// `target_length` is expected in the 30..=150 range the UI exposes; the
/// text itself is validated by the pipeline (non-blank, more than 15 words)
/// before any engine work.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub raw_text: String,
    pub model_profile: ModelProfile,
    pub target_length: u32,
    pub remove_redundancy: bool,
}

/// Result of a successful pipeline run, owned by the caller.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    pub summary_text: String,
    pub metrics: SummaryMetrics,
}
