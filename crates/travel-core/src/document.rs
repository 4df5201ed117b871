//! Source document types

use serde::{Deserialize, Serialize};

/// One page of the source document, as extracted at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDocument {
    /// 0-based page ordinal in the source file.
    pub page: usize,
    /// Extracted text of the page.
    pub content: String,
}
