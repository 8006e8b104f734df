use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    safety_settings: Vec<SafetySetting>,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("The API key string is empty."));
        }
        if config.model.trim().is_empty() {
            return Err(Error::config("The model name is empty."));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
            safety_settings: Vec::new(),
        })
    }

    pub fn with_safety_settings(mut self, safety_settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = safety_settings;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn safety_settings(&self) -> &[SafetySetting] {
        &self.safety_settings
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            "Sending generateContent request"
        );

        let body = GenerateContentRequest::from_prompt(request.prompt, &self.safety_settings);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await?;

        debug!(
            candidates = api_response.candidates.len(),
            "Received generateContent response"
        );

        Ok(api_response.into())
    }
}
