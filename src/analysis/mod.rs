//! Symptom analysis: prompt rendering, the remote call, and classification
//! of its outcome.

mod prompt;

pub use prompt::render_prompt;

use crate::{
    Error,
    llm::{GenerateRequest, LlmClient},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub const SERVICE_UNAVAILABLE_DETAIL: &str =
    "Gemini API client is not initialized. Check server logs for API key errors.";
pub const EMPTY_RESPONSE_DETAIL: &str = "Empty response from Gemini API.";
pub const COMMUNICATION_ERROR_DETAIL: &str =
    "An error occurred while communicating with the AI model.";

/// Why an analysis failed. The `Display` form is for logs; callers only ever
/// see [`AnalysisError::detail`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("LLM client is not initialized")]
    ServiceUnavailable,

    #[error("LLM returned no text (finish reason: {finish_reason:?})")]
    EmptyResponse { finish_reason: Option<String> },

    #[error("LLM communication failed: {0}")]
    Communication(#[source] Error),
}

impl AnalysisError {
    pub fn detail(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable => SERVICE_UNAVAILABLE_DETAIL,
            Self::EmptyResponse { .. } => EMPTY_RESPONSE_DETAIL,
            Self::Communication(_) => COMMUNICATION_ERROR_DETAIL,
        }
    }
}

/// Holds the process-wide model handle. `None` means bootstrap failed and
/// every analysis is refused without contacting the provider.
#[derive(Clone)]
pub struct SymptomAnalyzer {
    client: Option<Arc<dyn LlmClient>>,
}

impl SymptomAnalyzer {
    pub fn new(client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { client }
    }

    pub fn unavailable() -> Self {
        Self { client: None }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    /// Runs one analysis: a single remote call, no retry, no caching.
    pub async fn analyze(&self, symptoms: &str) -> Result<String, AnalysisError> {
        let client = self
            .client
            .as_ref()
            .ok_or(AnalysisError::ServiceUnavailable)?;

        let prompt = render_prompt(symptoms);
        debug!(
            symptoms_len = symptoms.len(),
            prompt_len = prompt.len(),
            "Rendered analysis prompt"
        );

        let response = client
            .generate(GenerateRequest::new(prompt))
            .await
            .map_err(AnalysisError::Communication)?;

        match response.text {
            Some(text) if !text.is_empty() => Ok(text.trim().to_string()),
            _ => Err(AnalysisError::EmptyResponse {
                finish_reason: response.finish_reason,
            }),
        }
    }
}
