use async_trait::async_trait;
use rig::client::EmbeddingsClient;
use rig::embeddings::EmbeddingsBuilder;
use rig::providers::ollama;

use crate::domain::{ports::EmbeddingService, DomainError, Embedding};
use crate::infrastructure::config::EmbeddingConfig;
use crate::infrastructure::ollama::build_client;

/// Embeddings served by an Ollama instance.
pub struct OllamaEmbedding {
    client: ollama::Client,
    model: String,
}

impl OllamaEmbedding {
    pub fn new(base_url: &str, model: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(base_url)?,
            model: model.into(),
        })
    }

    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, DomainError> {
        Self::new(&config.base_url, config.model.clone())
    }
}

#[async_trait]
impl EmbeddingService for OllamaEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        self.embed_batch(&[text])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::internal("No embedding returned"))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = self.client.embedding_model(&self.model);

        let mut builder = EmbeddingsBuilder::new(model);
        for text in texts {
            builder = builder
                .document(text.to_string())
                .map_err(|e| DomainError::external(e.to_string()))?;
        }

        let embeddings = builder
            .build()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        if embeddings.len() != texts.len() {
            return Err(DomainError::external(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }

        Ok(embeddings
            .into_iter()
            .map(|(_doc, emb)| {
                let vec_f32: Vec<f32> = emb.first().vec.into_iter().map(|x| x as f32).collect();
                Embedding::new(vec_f32)
            })
            .collect())
    }
}
