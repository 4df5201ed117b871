//! Process-wide application state

use std::sync::Arc;

use crate::pipeline::QueryPipeline;

/// State built once in `main` and shared read-only with every request
/// handler. Which pipeline lives here is decided at startup; it never
/// changes for the process lifetime.
pub struct AppContext {
    pub pipeline: Arc<dyn QueryPipeline>,
}

impl AppContext {
    pub fn new(pipeline: Arc<dyn QueryPipeline>) -> Self {
        Self { pipeline }
    }
}
