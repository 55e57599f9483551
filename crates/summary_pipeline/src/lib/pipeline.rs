pub mod builder;

use std::time::{Duration, Instant};

use summary_history::{HistoryEntry, HistoryLedger, ModelProfile};

use crate::{
    engine::{cache::EngineCache, SummaryEngine},
    error::{EngineFailure, PipelineError, ValidationError},
    metrics::{compute_metrics, word_count},
    normalizer::normalize,
    params::resolve_length_bounds,
    types::{SummaryRequest, SummaryResult},
};

/// Inputs with 15 or fewer words are rejected before touching the engine.
const MIN_INPUT_WORDS: usize = 15;

/// The summarization request orchestrator.
///
/// Stateless apart from the injected engine cache; the session's
/// [`HistoryLedger`] is owned by the caller and passed into each run.
pub struct SummaryPipeline<E, F>
where
    E: SummaryEngine,
    F: Fn(ModelProfile) -> E,
{
    engines: EngineCache<E, F>,
    engine_timeout: Duration,
}

impl<E, F> SummaryPipeline<E, F>
where
    E: SummaryEngine,
    F: Fn(ModelProfile) -> E,
{
    /// Runs one request end to end: validate, preprocess, resolve bounds,
    /// summarize, compute metrics, append to history.
    ///
    /// The ledger is only appended to after a fully successful run; any
    /// validation or engine failure leaves it untouched.
    #[tracing::instrument(
        skip(self, request, ledger),
        fields(
            profile = %request.model_profile,
            target_length = request.target_length,
            remove_redundancy = request.remove_redundancy,
        )
    )]
    pub async fn run(
        &self,
        request: &SummaryRequest,
        ledger: &mut HistoryLedger,
    ) -> Result<SummaryResult, PipelineError> {
        validate(&request.raw_text)?;

        let processed_text = if request.remove_redundancy {
            normalize(&request.raw_text)
        } else {
            request.raw_text.clone()
        };

        let bounds = resolve_length_bounds(request.target_length, request.model_profile);
        let engine = self.engines.get(request.model_profile);

        let started = Instant::now();
        let summary_text = tokio::time::timeout(
            self.engine_timeout,
            engine.summarize(&processed_text, bounds),
        )
        .await
        .map_err(|_| {
            tracing::warn!(timeout = ?self.engine_timeout, "Engine call timed out");
            EngineFailure::Timeout
        })?
        .map_err(|e| {
            tracing::error!(error = ?e, "Engine call failed");
            e.into()
        })
        .map_err(PipelineError::Engine)?;
        let elapsed = started.elapsed();

        // metrics and the history excerpt both reflect the raw input, not
        // the preprocessed text
        let metrics = compute_metrics(&request.raw_text, &summary_text, elapsed);

        ledger.append(HistoryEntry::new(
            &request.raw_text,
            summary_text.clone(),
            request.model_profile,
            metrics.summary_word_count,
            metrics.compression_ratio,
        ));

        tracing::info!(
            original_words = metrics.original_word_count,
            summary_words = metrics.summary_word_count,
            compression = metrics.compression_ratio,
            elapsed_seconds = metrics.processing_time_seconds,
            "Summarization complete"
        );

        Ok(SummaryResult {
            summary_text,
            metrics,
        })
    }
}

fn validate(raw_text: &str) -> Result<(), ValidationError> {
    if raw_text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    let words = word_count(raw_text);
    if words <= MIN_INPUT_WORDS {
        return Err(ValidationError::TooShort {
            words,
            min: MIN_INPUT_WORDS,
        });
    }
    Ok(())
}
