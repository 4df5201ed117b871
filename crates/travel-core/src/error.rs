//! Error taxonomy shared across the workspace

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors propagated with `?` through every pipeline stage.
///
/// The HTTP boundary maps `Validation` to a client error; every other
/// variant surfaces as an internal error carrying this display string.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error was caused by the client's request rather than the
    /// service or its upstream endpoints.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
