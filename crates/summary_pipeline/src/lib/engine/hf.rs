use reqwest::Client;
use serde::Deserialize;
use summary_history::ModelProfile;

use crate::{engine::SummaryEngine, error::EngineFailure, params::LengthBounds};

/// Summarization engine backed by the Hugging Face Inference API.
///
/// One client serves one model profile; the profile picks the hosted model.
pub struct HfInferenceClient {
    client: Client,
    api_token: String,
    base_url: String,
    model_id: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum HfError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("response contained no summary text")]
    EmptyResponse,
}

impl From<HfError> for EngineFailure {
    fn from(err: HfError) -> Self {
        match err {
            HfError::Request(e) if e.is_timeout() => EngineFailure::Timeout,
            HfError::Request(e) if e.is_decode() => EngineFailure::Malformed(e.to_string()),
            HfError::Request(e) => EngineFailure::Unavailable(e.to_string()),
            HfError::Api { status, message } => {
                EngineFailure::Unavailable(format!("{status}: {message}"))
            }
            HfError::EmptyResponse => {
                EngineFailure::Malformed("no summary_text in response".into())
            }
        }
    }
}

fn model_id(profile: ModelProfile) -> &'static str {
    match profile {
        ModelProfile::Primary => "facebook/bart-large-cnn",
        ModelProfile::Fast => "t5-small",
    }
}

impl HfInferenceClient {
    pub fn new(api_token: impl Into<String>, profile: ModelProfile) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
            model_id: model_id(profile),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_summarize_request(
        &self,
        text: &str,
        bounds: LengthBounds,
    ) -> Result<Vec<SummaryPayload>, HfError> {
        let body = serde_json::json!({
            "inputs": text,
            "parameters": {
                "min_length": bounds.min_length,
                "max_length": bounds.max_length,
                // sampling off so identical input yields identical output
                "do_sample": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model_id))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(HfError::Api { status, message });
        }

        Ok(resp.json::<Vec<SummaryPayload>>().await?)
    }
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary_text: String,
}

impl SummaryEngine for HfInferenceClient {
    type Error = HfError;

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, Self::Error> {
        let payloads = self.send_summarize_request(text, bounds).await?;
        payloads
            .into_iter()
            .next()
            .map(|p| p.summary_text)
            .ok_or(HfError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_map_to_hosted_models() {
        assert_eq!(model_id(ModelProfile::Primary), "facebook/bart-large-cnn");
        assert_eq!(model_id(ModelProfile::Fast), "t5-small");
    }

    #[test]
    fn test_api_errors_surface_as_unavailable() {
        let failure: EngineFailure = HfError::Api {
            status: 503,
            message: "model loading".into(),
        }
        .into();
        assert!(matches!(failure, EngineFailure::Unavailable(_)));
    }

    #[test]
    fn test_empty_response_surfaces_as_malformed() {
        let failure: EngineFailure = HfError::EmptyResponse.into();
        assert!(matches!(failure, EngineFailure::Malformed(_)));
    }
}
