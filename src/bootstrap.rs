use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{GeminiClient, LlmClient, SafetySetting},
};
use std::sync::Arc;
use tracing::{error, info};

/// Builds the process-wide model handle. Called once at startup.
///
/// Failure is logged and yields `None`; the server still comes up and
/// answers health checks, and analysis requests are refused.
pub fn init_llm_client(config: &LlmConfig) -> Option<Arc<dyn LlmClient>> {
    match build_llm_client(config) {
        Ok(client) => {
            info!(
                provider = %config.provider,
                model = %config.model,
                "LLM client initialized"
            );
            Some(client)
        }
        Err(e) => {
            error!("Error initializing Gemini client: {}", e);
            None
        }
    }
}

pub fn build_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    match config.provider.as_str() {
        "gemini" => {
            let client = GeminiClient::new(config.clone())?
                .with_safety_settings(SafetySetting::block_none_defaults());
            Ok(Arc::new(client))
        }
        other => Err(Error::config(format!("Unsupported LLM provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini_config(api_key: &str) -> LlmConfig {
        LlmConfig {
            api_key: api_key.to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_valid_key_yields_handle() {
        assert!(init_llm_client(&gemini_config("test-key")).is_some());
    }

    #[test_log::test]
    fn test_empty_key_degrades_to_none() {
        assert!(init_llm_client(&gemini_config("")).is_none());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let mut config = gemini_config("test-key");
        config.provider = "openai".to_string();

        let err = build_llm_client(&config).err().unwrap();
        assert!(err.to_string().contains("Unsupported LLM provider: openai"));
    }
}
