//! Hugging Face feature-extraction (embedding) client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use travel_core::{Error, Result, TextEmbedder};

use crate::config::HfConfig;

/// Client for the hosted feature-extraction pipeline.
pub struct HfEmbedder {
    config: HfConfig,
    client: Client,
    model_id: String,
}

#[derive(Serialize)]
struct EmbeddingOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    inputs: &'a [String],
    options: EmbeddingOptions,
}

impl HfEmbedder {
    /// Model constants
    pub const ALL_MINILM_L6_V2: &'static str = "sentence-transformers/all-MiniLM-L6-v2";

    /// Create a new embedder from configuration.
    pub fn new(config: HfConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            config,
            client,
            model_id: Self::ALL_MINILM_L6_V2.to_string(),
        })
    }

    /// Create a new embedder from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = HfConfig::from_env()?;
        Self::new(config)
    }

    /// Set the embedding model.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }
}

#[async_trait]
impl TextEmbedder for HfEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request_body = EmbeddingRequest {
            inputs: texts,
            options: EmbeddingOptions {
                wait_for_model: true,
            },
        };

        let url = format!(
            "{}/pipeline/feature-extraction/{}",
            self.config.api_url, self.model_id
        );

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
                "Hugging Face embedding request failed with status {}: {}",
                status, error_text
            )));
        }

        let vectors: Vec<Vec<f32>> = response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("unexpected embedding payload: {}", e)))?;

        if vectors.len() != texts.len() {
            return Err(Error::Inference(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        Ok(vectors)
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        let texts = [text.to_string()];
        let mut vectors = self.embed(&texts).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Inference("no embedding returned for query".to_string()))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
