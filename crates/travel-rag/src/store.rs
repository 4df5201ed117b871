//! In-memory vector index

use travel_core::{SearchConfig, VectorDocument};

/// In-memory vector index over embedded document chunks.
///
/// Built once at startup and queried read-only afterwards, so searches take
/// `&self` and concurrent requests need no locking.
pub struct InMemoryVectorStore {
    documents: Vec<VectorDocument>,
}

impl InMemoryVectorStore {
    pub fn new(documents: Vec<VectorDocument>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }

    /// Nearest chunks by cosine similarity, best first.
    ///
    /// Chunks without an embedding are skipped.
    pub fn search_by_vector(&self, vector: &[f32], config: &SearchConfig) -> Vec<VectorDocument> {
        let mut results: Vec<VectorDocument> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let embedding = doc.embedding.as_ref()?;
                let score = Self::cosine_similarity(vector, embedding);
                let mut doc_with_score = doc.clone();
                doc_with_score.score = Some(score);
                Some(doc_with_score)
            })
            .filter(|doc| match config.score_threshold {
                Some(threshold) => doc.score.unwrap_or(0.0) >= threshold,
                None => true,
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .unwrap_or(0.0)
                .partial_cmp(&a.score.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(config.top_k);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, page: usize, embedding: Option<Vec<f32>>) -> VectorDocument {
        VectorDocument {
            id: id.to_string(),
            content: format!("content of {}", id),
            embedding,
            page,
            score: None,
        }
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let store = InMemoryVectorStore::new(vec![
            doc("far", 0, Some(vec![0.0, 1.0])),
            doc("near", 1, Some(vec![1.0, 0.1])),
            doc("exact", 2, Some(vec![1.0, 0.0])),
        ]);

        let results = store.search_by_vector(&[1.0, 0.0], &SearchConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "exact");
        assert_eq!(results[1].id, "near");
        assert_eq!(results[2].id, "far");
        assert!(results[0].score.unwrap() > results[1].score.unwrap());
    }

    #[test]
    fn test_search_truncates_to_top_k() {
        let documents = (0..10)
            .map(|i| doc(&format!("doc{}", i), i, Some(vec![1.0, i as f32])))
            .collect();
        let store = InMemoryVectorStore::new(documents);

        let config = SearchConfig {
            top_k: 4,
            score_threshold: None,
        };
        let results = store.search_by_vector(&[1.0, 0.0], &config);
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_search_skips_unembedded_chunks() {
        let store = InMemoryVectorStore::new(vec![
            doc("embedded", 0, Some(vec![1.0, 0.0])),
            doc("unembedded", 1, None),
        ]);

        let results = store.search_by_vector(&[1.0, 0.0], &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "embedded");
    }

    #[test]
    fn test_score_threshold_filters() {
        let store = InMemoryVectorStore::new(vec![
            doc("aligned", 0, Some(vec![1.0, 0.0])),
            doc("orthogonal", 1, Some(vec![0.0, 1.0])),
        ]);

        let config = SearchConfig {
            top_k: 4,
            score_threshold: Some(0.5),
        };
        let results = store.search_by_vector(&[1.0, 0.0], &config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "aligned");
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let store = InMemoryVectorStore::new(vec![doc("a", 0, Some(vec![1.0, 1.0]))]);
        let results = store.search_by_vector(&[0.0, 0.0], &SearchConfig::default());
        assert_eq!(results[0].score, Some(0.0));
    }
}
