//! Retrieval engine

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::debug;

use travel_core::{Error, PageDocument, Result, SearchConfig, TextEmbedder, VectorDocument};

use crate::store::InMemoryVectorStore;

/// How many chunks the retriever hands to the prompt.
pub const DEFAULT_TOP_K: usize = 4;

const EMBED_BATCH_SIZE: usize = 32;
const EMBED_CONCURRENCY: usize = 8;

/// Retrieval engine: an embedder seam plus the in-memory index.
///
/// Generic over the embedder so tests can drive retrieval with a
/// deterministic stand-in for the hosted endpoint.
pub struct RagEngine<E: TextEmbedder> {
    embedder: Arc<E>,
    store: InMemoryVectorStore,
    search_config: SearchConfig,
}

impl<E: TextEmbedder> RagEngine<E> {
    /// Embed every page and build the index.
    ///
    /// Startup-only; any failure here must abort the process before it
    /// begins serving.
    pub async fn build(embedder: Arc<E>, pages: Vec<PageDocument>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::VectorStore(
                "cannot build an index from an empty document".to_string(),
            ));
        }

        let batches: Vec<Vec<PageDocument>> = pages
            .chunks(EMBED_BATCH_SIZE)
            .map(|batch| batch.to_vec())
            .collect();

        let embedded = stream::iter(batches.into_iter().map(|batch| {
            let embedder = embedder.clone();
            async move {
                let texts: Vec<String> = batch.iter().map(|page| page.content.clone()).collect();
                let vectors = embedder.embed(&texts).await?;
                Ok::<_, Error>(batch.into_iter().zip(vectors).collect::<Vec<_>>())
            }
        }))
        .buffer_unordered(EMBED_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

        let mut documents = Vec::new();
        for batch in embedded {
            for (page, vector) in batch? {
                documents.push(VectorDocument {
                    id: format!("page_{}", page.page),
                    content: page.content,
                    embedding: Some(vector),
                    page: page.page,
                    score: None,
                });
            }
        }

        // buffer_unordered scrambles batch completion order; restore page
        // order so the index is deterministic for a given document.
        documents.sort_by_key(|doc| doc.page);

        Ok(Self {
            embedder,
            store: InMemoryVectorStore::new(documents),
            search_config: SearchConfig {
                top_k: DEFAULT_TOP_K,
                score_threshold: None,
            },
        })
    }

    /// Top matching chunks for a free-text query, best first.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<VectorDocument>> {
        let vector = self.embedder.embed_query(query).await?;
        let results = self.store.search_by_vector(&vector, &self.search_config);
        debug!(
            chunks = results.len(),
            top_score = results.first().and_then(|doc| doc.score),
            "retrieved context"
        );
        Ok(results)
    }

    /// Number of chunks held by the index.
    pub fn chunk_count(&self) -> usize {
        self.store.len()
    }
}

/// Concatenate retrieved chunks into the prompt context.
pub fn build_context(documents: &[VectorDocument]) -> String {
    documents
        .iter()
        .map(|doc| doc.content.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct KeywordEmbedder;

    fn keyword_vector(text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        vec![
            lower.matches("paris").count() as f32 + 0.01,
            lower.matches("tokyo").count() as f32,
            lower.matches("weather").count() as f32,
        ]
    }

    #[async_trait]
    impl TextEmbedder for KeywordEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|text| keyword_vector(text)).collect())
        }

        async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
            Ok(keyword_vector(text))
        }

        fn model_id(&self) -> &str {
            "keyword-embedder"
        }
    }

    fn pages() -> Vec<PageDocument> {
        vec![
            PageDocument {
                page: 0,
                content: "Paris is the capital of France.".to_string(),
            },
            PageDocument {
                page: 1,
                content: "Tokyo is famous for sushi.".to_string(),
            },
            PageDocument {
                page: 2,
                content: "Check the weather before hiking.".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_build_indexes_every_page() {
        let engine = RagEngine::build(Arc::new(KeywordEmbedder), pages())
            .await
            .unwrap();
        assert_eq!(engine.chunk_count(), 3);
    }

    #[tokio::test]
    async fn test_build_rejects_empty_document() {
        let result = RagEngine::build(Arc::new(KeywordEmbedder), Vec::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_retrieve_ranks_matching_page_first() {
        let engine = RagEngine::build(Arc::new(KeywordEmbedder), pages())
            .await
            .unwrap();

        let results = engine.retrieve("Tell me about Paris").await.unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].page, 0);
        assert!(results[0].content.contains("capital of France"));
    }

    #[tokio::test]
    async fn test_retrieve_is_deterministic() {
        let engine = RagEngine::build(Arc::new(KeywordEmbedder), pages())
            .await
            .unwrap();

        let first = engine.retrieve("weather in Tokyo").await.unwrap();
        let second = engine.retrieve("weather in Tokyo").await.unwrap();
        let ids = |docs: &[VectorDocument]| docs.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_build_context_joins_chunks() {
        let documents = vec![
            VectorDocument {
                id: "page_0".to_string(),
                content: "  Paris is the capital of France.  ".to_string(),
                embedding: None,
                page: 0,
                score: Some(0.9),
            },
            VectorDocument {
                id: "page_1".to_string(),
                content: "Tokyo is famous for sushi.".to_string(),
                embedding: None,
                page: 1,
                score: Some(0.2),
            },
        ];

        let context = build_context(&documents);
        assert_eq!(
            context,
            "Paris is the capital of France.\n\nTokyo is famous for sushi."
        );
    }

    #[test]
    fn test_build_context_empty() {
        assert_eq!(build_context(&[]), "");
    }
}
