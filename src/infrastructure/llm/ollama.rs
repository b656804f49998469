use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::ollama;

use crate::domain::{ports::LlmService, DomainError};
use crate::infrastructure::config::LlmConfig;
use crate::infrastructure::ollama::build_client;

pub struct OllamaLlm {
    client: ollama::Client,
    model: String,
}

impl OllamaLlm {
    pub fn new(base_url: &str, model: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(base_url)?,
            model: model.into(),
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, DomainError> {
        Self::new(&config.base_url, config.model.clone())
    }
}

#[async_trait]
impl LlmService for OllamaLlm {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let agent = self.client.agent(&self.model).build();
        agent
            .prompt(prompt)
            .await
            .map_err(|e| DomainError::external(e.to_string()))
    }
}
