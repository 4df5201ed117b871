//! LLM provider and embedder traits

use async_trait::async_trait;

use crate::Result;

/// Trait for hosted text-generation endpoints.
///
/// Implementations own their credential and HTTP plumbing; the pipelines only
/// hand over a fully assembled prompt and receive the generated text.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for an assembled prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Identifier of the hosted model behind this provider.
    fn model_id(&self) -> &str;
}

/// Trait for hosted embedding endpoints.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embed a batch of texts. The result has one vector per input, in input
    /// order.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query string.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;

    /// Identifier of the hosted embedding model.
    fn model_id(&self) -> &str;
}
