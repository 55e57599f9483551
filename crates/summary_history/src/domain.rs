use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which summarization capability variant services a request.
///
/// `Primary` is the quality-oriented model, `Fast` the lighter one with a
/// narrower safe output-length envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelProfile {
    Primary,
    Fast,
}

impl std::fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProfile::Primary => write!(f, "primary"),
            ModelProfile::Fast => write!(f, "fast"),
        }
    }
}

/// Excerpts stored in history keep at most this many characters of the
/// original input.
pub(crate) const EXCERPT_MAX_CHARS: usize = 300;

/// A single completed summarization request, as retained for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub original_excerpt: String,
    pub summary_text: String,
    pub model_profile: ModelProfile,
    pub summary_word_count: usize,
    pub compression_label: String,
}

impl HistoryEntry {
    /// Builds an entry from a finished run. The excerpt is capped at 300
    /// characters of the raw input with an ellipsis marker when truncated;
    /// the compression label uses the `"5.0x"` display format.
    pub fn new(
        original_text: &str,
        summary_text: impl Into<String>,
        model_profile: ModelProfile,
        summary_word_count: usize,
        compression_ratio: f64,
    ) -> Self {
        HistoryEntry {
            timestamp: Utc::now(),
            original_excerpt: excerpt(original_text),
            summary_text: summary_text.into(),
            model_profile,
            summary_word_count,
            compression_label: format!("{compression_ratio:.1}x"),
        }
    }
}

fn excerpt(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(EXCERPT_MAX_CHARS) {
        // char-based cap, not bytes, so multi-byte input is never split
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_truncated() {
        assert_eq!(excerpt("a short input"), "a short input");
    }

    #[test]
    fn test_text_of_exactly_cap_length_is_not_truncated() {
        let text = "x".repeat(300);
        assert_eq!(excerpt(&text), text);
    }

    #[test]
    fn test_long_text_gets_ellipsis_marker() {
        let text = "y".repeat(301);
        let e = excerpt(&text);
        assert_eq!(e.chars().count(), 303);
        assert!(e.ends_with("..."));
        assert!(e.starts_with("yyy"));
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundary() {
        let text = "é".repeat(400);
        let e = excerpt(&text);
        assert_eq!(e, format!("{}...", "é".repeat(300)));
    }

    #[test]
    fn test_entry_formats_compression_label() {
        let entry = HistoryEntry::new("some original", "summary", ModelProfile::Fast, 20, 5.0);
        assert_eq!(entry.compression_label, "5.0x");
        assert_eq!(entry.summary_word_count, 20);
        assert_eq!(entry.model_profile, ModelProfile::Fast);
    }
}
