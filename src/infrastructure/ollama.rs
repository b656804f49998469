use rig::client::Nothing;
use rig::providers::ollama;

use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const BASE_URL_ENV: &str = "OLLAMA_API_BASE_URL";

/// Ollama needs no API key, only an endpoint.
pub(crate) fn build_client(base_url: &str) -> Result<ollama::Client, DomainError> {
    ollama::Client::builder()
        .api_key(Nothing)
        .base_url(base_url)
        .build()
        .map_err(|e| DomainError::config(format!("ollama client for {base_url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::{OllamaEmbedding, OllamaLlm};

    #[test]
    fn test_adapters_build_from_defaults_without_env() {
        std::env::remove_var(BASE_URL_ENV);
        let config = AppConfig::default();

        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.embedding.base_url, DEFAULT_BASE_URL);
        assert!(OllamaEmbedding::from_config(&config.embedding).is_ok());
        assert!(OllamaLlm::from_config(&config.llm).is_ok());
    }
}
