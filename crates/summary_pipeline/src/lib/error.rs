/// Input rejected before any engine work happens.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input text is empty")]
    Empty,
    #[error("input text has {words} words; more than {min} are required")]
    TooShort { words: usize, min: usize },
}

/// Failure surfaced at the summarization engine boundary.
///
/// Adapter-internal error types convert into this taxonomy so the caller
/// never sees transport details.
#[derive(Debug, thiserror::Error)]
pub enum EngineFailure {
    #[error("summarization engine call timed out")]
    Timeout,
    #[error("summarization engine unavailable: {0}")]
    Unavailable(String),
    #[error("summarization engine returned malformed output: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("summarization failed: {0}")]
    Engine(#[from] EngineFailure),
}
