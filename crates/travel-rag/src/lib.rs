//! Document loading, vector index, and retrieval for Travel.AI
//!
//! Everything here runs either once at startup (load the source PDF, embed
//! its pages, build the index) or read-only per request (embed the query,
//! return the nearest chunks).

mod engine;
mod loader;
mod store;

pub use engine::{DEFAULT_TOP_K, RagEngine, build_context};
pub use loader::load_pdf;
pub use store::InMemoryVectorStore;
