//! The two request pipelines

use async_trait::async_trait;
use std::sync::Arc;

use travel_core::{Error, LlmProvider, Result, TextEmbedder};
use travel_rag::{RagEngine, build_context};

use crate::prompt;
use crate::routes::QueryRequest;

/// Role-prefix artifacts the hosted model sometimes emits in chat mode.
const CHAT_MARKERS: [&str; 3] = ["AI response:", "chat response:", "bot response:"];

/// A deployable answer pipeline behind `/get_response`.
///
/// Each variant validates the fields it requires, so a missing field is a
/// typed `Validation` error the boundary turns into a 400.
#[async_trait]
pub trait QueryPipeline: Send + Sync {
    /// Validate the request and produce the answer text.
    async fn answer(&self, request: &QueryRequest) -> Result<String>;
}

/// Variant 1: answers grounded in the indexed source document.
pub struct RagPipeline<E: TextEmbedder> {
    llm: Arc<dyn LlmProvider>,
    engine: RagEngine<E>,
}

impl<E: TextEmbedder> RagPipeline<E> {
    pub fn new(llm: Arc<dyn LlmProvider>, engine: RagEngine<E>) -> Self {
        Self { llm, engine }
    }
}

#[async_trait]
impl<E: TextEmbedder + 'static> QueryPipeline for RagPipeline<E> {
    async fn answer(&self, request: &QueryRequest) -> Result<String> {
        let question = request
            .user_query
            .as_deref()
            .ok_or_else(|| Error::Validation("Missing 'user_query' in request".to_string()))?;

        let documents = self.engine.retrieve(question).await?;
        let context = build_context(&documents);
        let prompt = prompt::rag_prompt(&context, question);

        let response = self.llm.generate(&prompt).await?;
        Ok(response.trim().to_string())
    }
}

/// Variant 2: persona chat over caller-supplied history.
pub struct ChatPipeline {
    llm: Arc<dyn LlmProvider>,
}

impl ChatPipeline {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QueryPipeline for ChatPipeline {
    async fn answer(&self, request: &QueryRequest) -> Result<String> {
        let question = request
            .user_query
            .as_deref()
            .ok_or_else(|| Error::Validation("Missing 'user_query' in request".to_string()))?;

        let history = request
            .chat_history
            .as_ref()
            .ok_or_else(|| Error::Validation("Missing 'chat_history' in request".to_string()))?;

        let prompt = prompt::chat_prompt(history, question);
        let response = self.llm.generate(&prompt).await?;

        Ok(clean_chat_response(&response))
    }
}

/// Strip role-prefix artifacts the model sometimes emits, then trim.
///
/// Removes every occurrence of each marker regardless of position. This is
/// a heuristic; prefixes outside the marker list pass through untouched.
pub fn clean_chat_response(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in CHAT_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    cleaned.trim().to_string()
}
