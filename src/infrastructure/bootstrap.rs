use std::sync::Arc;
use std::time::Duration;

use crate::application::{AnswerResolver, KnowledgeBase, ResolverSettings};
use crate::domain::{
    ports::{EmbeddingService, LlmService, VectorStore},
    DomainError,
};
use crate::infrastructure::config::{AppConfig, IndexBackend};
use crate::infrastructure::{
    dataset, InMemoryVectorStore, OllamaEmbedding, OllamaLlm, QdrantVectorStore,
};

impl From<&AppConfig> for ResolverSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            threshold: config.resolver.threshold,
            clarification_message: config.resolver.clarification_message.clone(),
            error_prefix: config.resolver.error_prefix.clone(),
            fallback_timeout: Duration::from_secs(config.llm.timeout_seconds),
        }
    }
}

pub fn vector_store(config: &AppConfig) -> Result<Arc<dyn VectorStore>, DomainError> {
    Ok(match config.index.backend {
        IndexBackend::Memory => Arc::new(InMemoryVectorStore::new()),
        IndexBackend::Qdrant => Arc::new(QdrantVectorStore::new(
            &config.index.qdrant_url,
            &config.index.collection,
        )?),
    })
}

/// Loads the dataset, indexes it and wires the resolver. Runs once per process.
pub async fn build_resolver(config: &AppConfig) -> Result<AnswerResolver, DomainError> {
    let embedding: Arc<dyn EmbeddingService> =
        Arc::new(OllamaEmbedding::from_config(&config.embedding)?);
    let llm: Arc<dyn LlmService> = Arc::new(OllamaLlm::from_config(&config.llm)?);
    build_resolver_with(config, embedding, vector_store(config)?, llm).await
}

pub async fn build_resolver_with(
    config: &AppConfig,
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    llm: Arc<dyn LlmService>,
) -> Result<AnswerResolver, DomainError> {
    let records = dataset::resolve_records(config.knowledge_base_path.as_deref())?;
    tracing::info!(
        records = records.len(),
        source = ?config.knowledge_base_path,
        "knowledge base loaded"
    );

    let knowledge_base = Arc::new(KnowledgeBase::new(embedding, vector_store, records));
    knowledge_base.index().await?;

    Ok(AnswerResolver::new(
        knowledge_base,
        llm,
        ResolverSettings::from(config),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResolutionKind;
    use crate::test_support::{BagOfWordsEmbedding, ScriptedLlm};

    #[tokio::test]
    async fn test_build_resolver_with_builtin_dataset() {
        let config = AppConfig::default();
        let resolver = build_resolver_with(
            &config,
            Arc::new(BagOfWordsEmbedding::new()),
            Arc::new(InMemoryVectorStore::new()),
            Arc::new(ScriptedLlm::replying("fallback")),
        )
        .await
        .unwrap();

        assert_eq!(resolver.knowledge_base().indexed_count().await.unwrap(), 5);
        assert_eq!(resolver.settings().threshold, 0.50);
        assert_eq!(
            resolver.resolve("What does EVA do?").await.kind(),
            ResolutionKind::Faq
        );
    }

    #[tokio::test]
    async fn test_missing_dataset_file_fails_startup() {
        let mut config = AppConfig::default();
        config.knowledge_base_path = Some("/nonexistent/faq.yaml".into());

        let result = build_resolver_with(
            &config,
            Arc::new(BagOfWordsEmbedding::new()),
            Arc::new(InMemoryVectorStore::new()),
            Arc::new(ScriptedLlm::replying("fallback")),
        )
        .await;

        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = AppConfig::default();
        config.resolver.threshold = 0.8;
        config.llm.timeout_seconds = 5;

        let settings = ResolverSettings::from(&config);
        assert_eq!(settings.threshold, 0.8);
        assert_eq!(settings.fallback_timeout, Duration::from_secs(5));
    }
}
