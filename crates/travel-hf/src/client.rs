//! Hugging Face text-generation client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use travel_core::{Error, LlmProvider, Result};

use crate::config::HfConfig;

/// Client for the hosted text-generation endpoint.
pub struct HfClient {
    config: HfConfig,
    client: Client,
    model_id: String,
}

#[derive(Serialize)]
struct GenerationParams {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Serialize)]
struct GenerationOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParams,
    options: GenerationOptions,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

impl HfClient {
    /// Model constants
    pub const MIXTRAL_8X7B_INSTRUCT: &'static str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

    /// Create a new client from configuration.
    pub fn new(config: HfConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            config,
            client,
            model_id: Self::MIXTRAL_8X7B_INSTRUCT.to_string(),
        })
    }

    /// Create a new client from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = HfConfig::from_env()?;
        Self::new(config)
    }

    /// Set the model to use for generation.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Decode the `[{"generated_text": ...}]` payload the endpoint returns.
    fn decode_generation(body: &str) -> Result<String> {
        let results: Vec<GeneratedText> = serde_json::from_str(body)
            .map_err(|e| Error::Serialization(format!("unexpected generation payload: {}", e)))?;

        let text = results
            .into_iter()
            .next()
            .map(|r| r.generated_text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Inference(
                "empty generation from Hugging Face endpoint".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl LlmProvider for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request_body = GenerationRequest {
            inputs: prompt.to_string(),
            parameters: GenerationParams {
                max_new_tokens: 512,
                temperature: 0.7,
                return_full_text: false,
            },
            options: GenerationOptions {
                wait_for_model: true,
            },
        };

        let url = format!("{}/models/{}", self.config.api_url, self.model_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Inference(format!(
                "Hugging Face request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Self::decode_generation(&body)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
