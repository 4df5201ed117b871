//! Core traits and types for Travel.AI
//!
//! This crate defines the seams between the service and its hosted
//! components: the LLM provider and embedder traits, the document and vector
//! chunk types, and the error taxonomy shared by every crate in the
//! workspace. Keeping the remote seams behind traits makes the pipelines
//! test-friendly without touching the network.

pub mod document;
pub mod error;
pub mod llm;
pub mod vector_store;

pub use document::PageDocument;
pub use error::{Error, Result};
pub use llm::{LlmProvider, TextEmbedder};
pub use vector_store::{SearchConfig, VectorDocument};
