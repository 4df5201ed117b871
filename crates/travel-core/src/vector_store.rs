//! Vector index types

use serde::{Deserialize, Serialize};

/// A document chunk held by the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDocument {
    pub id: String,
    pub content: String,
    pub embedding: Option<Vec<f32>>,
    /// Source page the chunk was extracted from.
    pub page: usize,
    /// Similarity score, populated on search results.
    pub score: Option<f32>,
}

/// Configuration for a similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub top_k: usize,
    pub score_threshold: Option<f32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            score_threshold: None,
        }
    }
}
