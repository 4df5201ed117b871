//! Hugging Face configuration

use serde::{Deserialize, Serialize};
use std::env;

use travel_core::{Error, Result};

/// Default base URL of the hosted inference API.
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";

/// Configuration for the Hugging Face clients.
///
/// The credential is read once at process start; both the generation and the
/// embedding client share it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HfConfig {
    pub api_token: String,
    pub api_url: String,
}

impl HfConfig {
    /// Create configuration from environment variables, honoring a local
    /// `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = env::var("HUGGINGFACEHUB_API_TOKEN").map_err(|_| {
            Error::Configuration(
                "HUGGINGFACEHUB_API_TOKEN environment variable not found".to_string(),
            )
        })?;

        let api_url = env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self { api_token, api_url })
    }

    /// Create configuration with an explicit token.
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
