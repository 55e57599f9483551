use summary_history::ModelProfile;

/// Output-length constraints handed to the summarization engine.
///
/// Computed fresh per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: u32,
    pub max_length: u32,
}

/// Maps the requested target length and model profile to concrete engine
/// bounds.
///
/// The fast model has a narrower safe output-length envelope, so its maximum
/// is clamped to 100; the primary model's maximum is deliberately left
/// unclamped (intentional asymmetry, do not "fix" without product input).
pub fn resolve_length_bounds(target_length: u32, profile: ModelProfile) -> LengthBounds {
    match profile {
        ModelProfile::Fast => LengthBounds {
            min_length: target_length.saturating_sub(20).max(30),
            max_length: (target_length + 20).min(100),
        },
        ModelProfile::Primary => LengthBounds {
            min_length: target_length.saturating_sub(30).max(30),
            max_length: target_length + 30,
        },
    }
}
