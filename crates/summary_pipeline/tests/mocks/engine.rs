use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use summary_pipeline::{EngineFailure, LengthBounds, SummaryEngine};

/// Stub engine that echoes the first `max_length` characters of its input
/// as the summary and records every call it receives.
#[derive(Clone, Default)]
pub struct MockEngine {
    pub calls: Arc<Mutex<Vec<(String, LengthBounds)>>>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }
}

impl SummaryEngine for MockEngine {
    type Error = EngineFailure;

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), bounds));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref msg) = self.fail_with {
            return Err(EngineFailure::Unavailable(msg.clone()));
        }
        Ok(text.chars().take(bounds.max_length as usize).collect())
    }
}
