//! Snapshot tests for the Hugging Face clients

#[cfg(test)]
mod snapshot_tests {
    use crate::{HfClient, HfConfig, HfEmbedder, LlmProvider, TextEmbedder};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = HfConfig {
            api_token: "test_token_redacted".to_string(),
            api_url: "https://api-inference.huggingface.co".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_token: test_token_redacted
        api_url: "https://api-inference.huggingface.co"
        "###);
    }

    #[test]
    fn test_default_models() {
        let config = HfConfig::new("test_token".to_string());

        let client = HfClient::new(config.clone()).unwrap();
        assert_eq!(client.model_id(), "mistralai/Mixtral-8x7B-Instruct-v0.1");

        let embedder = HfEmbedder::new(config).unwrap();
        assert_eq!(embedder.model_id(), "sentence-transformers/all-MiniLM-L6-v2");
    }

    #[test]
    fn test_with_model_override() {
        let config = HfConfig::new("test_token".to_string());
        let client = HfClient::new(config).unwrap().with_model("google/flan-t5-xxl");
        assert_eq!(client.model_id(), "google/flan-t5-xxl");
    }
}
